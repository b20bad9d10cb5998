use super::setup_db;
use crate::PredictionRepository;

use sp_core::Prediction;

fn sample(user_id: i64) -> Prediction {
    Prediction::new(2025, 6, 200.0, 15.0, 1000.0, 3000.0, 2000.0, user_id)
}

#[tokio::test]
async fn given_created_prediction_when_listed_then_figures_round_trip() {
    let pool = setup_db().await;
    let repo = PredictionRepository::new(pool);

    let created = repo.create(&sample(7)).await.unwrap();
    let all = repo.find_all().await.unwrap();

    assert_eq!(all.len(), 1);
    let stored = &all[0];
    assert_eq!(stored.id, created.id);
    assert_eq!(stored.year, 2025);
    assert_eq!(stored.month, 6);
    assert_eq!(stored.units_sold, 200.0);
    assert_eq!(stored.sale_price, 15.0);
    assert_eq!(stored.cogs, 1000.0);
    assert_eq!(stored.predicted_sales, 3000.0);
    assert_eq!(stored.predicted_profit, 2000.0);
    assert_eq!(stored.user_id, 7);
    // stored at second precision
    assert_eq!(stored.created_at.timestamp(), created.created_at.timestamp());
}

#[tokio::test]
async fn given_predictions_for_two_users_when_filtered_then_only_owners_rows() {
    let pool = setup_db().await;
    let repo = PredictionRepository::new(pool);

    repo.create(&sample(7)).await.unwrap();
    repo.create(&sample(7)).await.unwrap();
    repo.create(&sample(8)).await.unwrap();

    let for_seven = repo.find_by_user(7).await.unwrap();
    let for_nine = repo.find_by_user(9).await.unwrap();

    assert_eq!(for_seven.len(), 2);
    assert!(for_seven.iter().all(|p| p.user_id == 7));
    assert!(for_nine.is_empty());
}

#[tokio::test]
async fn given_user_unknown_to_users_table_when_created_then_accepted() {
    // No referential check on user_id
    let pool = setup_db().await;
    let repo = PredictionRepository::new(pool);

    let created = repo.create(&sample(424242)).await.unwrap();

    assert_eq!(created.user_id, 424242);
}
