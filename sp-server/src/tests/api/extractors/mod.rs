mod session_cookie;
