/// Repository-level tests for the like toggle transaction
/// Needs a reachable Postgres (DATABASE_URL); run with --features pg_tests
mod common;

#[cfg(test)]
mod tests {
    use feed_service::db::{like_repo, post_repo};

    use crate::common::fixtures;

    #[actix_rt::test]
    async fn test_toggle_parity_keeps_counter_and_rows_in_step() {
        let pool = fixtures::create_test_pool().await;
        let user = fixtures::create_test_user(&pool).await;
        let post = fixtures::create_test_post(&pool, user.id, "parity").await;

        // Even number of toggles lands back on zero.
        for _ in 0..4 {
            like_repo::toggle_like(&pool, post.id, user.id).await.unwrap();
        }
        let reread = post_repo::find_post_by_id(&pool, post.id)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(reread.likes, 0);
        assert_eq!(
            like_repo::count_likes_by_post(&pool, post.id).await.unwrap(),
            0
        );

        // Odd lands on one.
        for _ in 0..3 {
            like_repo::toggle_like(&pool, post.id, user.id).await.unwrap();
        }
        let reread = post_repo::find_post_by_id(&pool, post.id)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(reread.likes, 1);
        assert_eq!(
            like_repo::count_likes_by_post(&pool, post.id).await.unwrap(),
            1
        );
    }

    #[actix_rt::test]
    async fn test_toggle_reports_resulting_state() {
        let pool = fixtures::create_test_pool().await;
        let user = fixtures::create_test_user(&pool).await;
        let post = fixtures::create_test_post(&pool, user.id, "state").await;

        assert!(!like_repo::has_liked(&pool, post.id, user.id).await.unwrap());

        let liked = like_repo::toggle_like(&pool, post.id, user.id).await.unwrap();
        assert!(liked);
        assert!(like_repo::has_liked(&pool, post.id, user.id).await.unwrap());

        let liked = like_repo::toggle_like(&pool, post.id, user.id).await.unwrap();
        assert!(!liked);
        assert!(!like_repo::has_liked(&pool, post.id, user.id).await.unwrap());
    }

    #[actix_rt::test]
    async fn test_concurrent_first_toggle_never_double_counts() {
        let pool = fixtures::create_test_pool().await;
        let user = fixtures::create_test_user(&pool).await;
        let post = fixtures::create_test_post(&pool, user.id, "race").await;

        // Two racing first-time toggles. Either they serialize (like then
        // unlike) or the loser hits the composite primary key and errors
        // with its whole transaction rolled back. Both counters must agree
        // afterwards and the like can never be counted twice.
        let (a, b) = tokio::join!(
            like_repo::toggle_like(&pool, post.id, user.id),
            like_repo::toggle_like(&pool, post.id, user.id),
        );
        assert!(a.is_ok() || b.is_ok());

        let reread = post_repo::find_post_by_id(&pool, post.id)
            .await
            .unwrap()
            .unwrap();
        let rows = like_repo::count_likes_by_post(&pool, post.id).await.unwrap();
        assert_eq!(i64::from(reread.likes), rows);
        assert!(rows <= 1);
    }

    #[actix_rt::test]
    async fn test_toggle_on_missing_post_rolls_back_cleanly() {
        let pool = fixtures::create_test_pool().await;
        let user = fixtures::create_test_user(&pool).await;

        let missing_post_id = 999_999_999;
        let result = like_repo::toggle_like(&pool, missing_post_id, user.id).await;
        assert!(result.is_err());

        // The failed insert must not leave a stray like row behind.
        let rows = like_repo::count_likes_by_post(&pool, missing_post_id)
            .await
            .unwrap();
        assert_eq!(rows, 0);
    }

    #[actix_rt::test]
    async fn test_likes_from_different_users_accumulate() {
        let pool = fixtures::create_test_pool().await;
        let author = fixtures::create_test_user(&pool).await;
        let fan = fixtures::create_test_user(&pool).await;
        let post = fixtures::create_test_post(&pool, author.id, "popular").await;

        like_repo::toggle_like(&pool, post.id, author.id).await.unwrap();
        like_repo::toggle_like(&pool, post.id, fan.id).await.unwrap();

        let reread = post_repo::find_post_by_id(&pool, post.id)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(reread.likes, 2);
        assert_eq!(
            like_repo::count_likes_by_post(&pool, post.id).await.unwrap(),
            2
        );

        // One fan leaving only removes their own like.
        like_repo::toggle_like(&pool, post.id, fan.id).await.unwrap();
        let reread = post_repo::find_post_by_id(&pool, post.id)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(reread.likes, 1);
        assert!(like_repo::has_liked(&pool, post.id, author.id).await.unwrap());
        assert!(!like_repo::has_liked(&pool, post.id, fan.id).await.unwrap());
    }
}
