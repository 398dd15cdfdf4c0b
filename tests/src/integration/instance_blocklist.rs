//! # Instance Blocklist Scenarios
//!
//! Blocks recorded by the instance apply to every viewer of
//! `localhost:9001`: administrators, moderators, plain users and anonymous
//! visitors alike. Entries are listed under the `peertube` account.

#[cfg(test)]
mod tests {
    use fb_01_block_registry::{ListQuery, SortKey};
    use shared_types::{AccountId, BlockScope, CommentId, Viewer};

    use crate::integration::fixture::{
        moderator, root, user1, user2, Expect, TwoServerFixture, LOCAL_HOST, REMOTE_HOST,
    };

    fn staff() -> Vec<Viewer> {
        vec![Viewer::from(moderator()), Viewer::from(root())]
    }

    fn mention_root() -> String {
        format!("hello @root@{LOCAL_HOST}")
    }

    #[tokio::test]
    async fn test_instance_account_blocks_apply_to_staff() {
        let fx = TwoServerFixture::start().await;
        for viewer in staff() {
            fx.check_all_videos(&viewer).await;
            fx.check_all_comments(&viewer).await;
        }

        fx.blocklists()
            .block_account(&root(), BlockScope::Instance, &format!("user2@{REMOTE_HOST}"))
            .await
            .unwrap();
        for viewer in staff() {
            let names = fx.video_names(&viewer).await;
            assert_eq!(names.len(), 3);
            assert!(!names.iter().any(|n| n == "video user 2"));
        }

        // A moderator may manage the instance blocklist too.
        fx.blocklists()
            .block_account(&moderator(), BlockScope::Instance, "user1")
            .await
            .unwrap();
        for viewer in staff() {
            let names = fx.video_names(&viewer).await;
            assert_eq!(names.len(), 2);
            assert!(!names.iter().any(|n| n == "video user 1"));

            let threads = fx.thread_list(&viewer).await;
            assert_eq!(threads.data.len(), 1);
            assert_eq!(threads.data[0].total_replies, 0);
            assert!(!threads.data.iter().any(|t| t.text == "comment user 1"));
            assert_eq!(fx.thread_children(&viewer, CommentId(1)).await, 0);
        }

        // Even the blocked account's own views are filtered by the instance.
        assert_eq!(fx.video_names(&Viewer::from(user1())).await.len(), 2);
        assert_eq!(fx.video_names(&Viewer::Anonymous).await.len(), 2);

        fx.blocklists()
            .unblock_account(&root(), BlockScope::Instance, &format!("user2@{REMOTE_HOST}"))
            .await
            .unwrap();
        for viewer in staff() {
            let names = fx.video_names(&viewer).await;
            assert_eq!(names.len(), 3);
            assert!(names.iter().any(|n| n == "video user 2"));
        }

        fx.blocklists()
            .unblock_account(&root(), BlockScope::Instance, "user1")
            .await
            .unwrap();
        for viewer in staff() {
            fx.check_all_comments(&viewer).await;
        }
    }

    #[tokio::test]
    async fn test_instance_entries_are_listed_under_the_instance_account() {
        let fx = TwoServerFixture::start().await;
        fx.blocklists()
            .block_account(&root(), BlockScope::Instance, &format!("user2@{REMOTE_HOST}"))
            .await
            .unwrap();
        fx.blocklists()
            .block_account(&root(), BlockScope::Instance, "user1")
            .await
            .unwrap();

        let first = fx
            .blocklists()
            .list_account_blocks(
                &root(),
                BlockScope::Instance,
                ListQuery::new(0, 1).sorted(SortKey::CreatedAtAsc),
            )
            .await
            .unwrap();
        assert_eq!(first.total, 2);
        assert_eq!(first.data[0].by_account.name, "peertube");
        assert_eq!(first.data[0].by_account.display_name, "peertube");
        assert_eq!(first.data[0].blocked_account.name, "user2");
        assert_eq!(first.data[0].blocked_account.host, REMOTE_HOST);

        let second = fx
            .blocklists()
            .list_account_blocks(
                &moderator(),
                BlockScope::Instance,
                ListQuery::new(1, 2).sorted(SortKey::CreatedAtAsc),
            )
            .await
            .unwrap();
        assert_eq!(second.total, 2);
        assert_eq!(second.data[0].by_account.name, "peertube");
        assert_eq!(second.data[0].blocked_account.name, "user1");
        assert_eq!(second.data[0].blocked_account.host, LOCAL_HOST);

        // Root's personal blocklist is a separate list.
        let personal = fx
            .blocklists()
            .list_account_blocks(&root(), BlockScope::Account, ListQuery::default())
            .await
            .unwrap();
        assert_eq!(personal.total, 0);
    }

    #[tokio::test]
    async fn test_instance_server_block_hides_for_anonymous_visitors() {
        let fx = TwoServerFixture::start().await;
        fx.blocklists()
            .block_server(&root(), BlockScope::Instance, REMOTE_HOST)
            .await
            .unwrap();

        let mut viewers = staff();
        viewers.push(Viewer::Anonymous);
        for viewer in viewers {
            let names = fx.video_names(&viewer).await;
            assert_eq!(names.len(), 2);
            assert!(!names.iter().any(|n| n == "video user 2"));
            assert!(!names.iter().any(|n| n == "video server 2"));
        }

        let servers = fx
            .blocklists()
            .list_server_blocks(&root(), BlockScope::Instance, ListQuery::new(0, 1))
            .await
            .unwrap();
        assert_eq!(servers.total, 1);
        assert_eq!(servers.data[0].by_account.name, "peertube");
        assert_eq!(servers.data[0].blocked_server.host, REMOTE_HOST);

        fx.blocklists()
            .unblock_server(&root(), BlockScope::Instance, REMOTE_HOST)
            .await
            .unwrap();
        for viewer in staff() {
            fx.check_all_videos(&viewer).await;
            fx.check_all_comments(&viewer).await;
        }
    }

    #[tokio::test]
    async fn test_instance_and_account_blocks_overlap_independently() {
        let fx = TwoServerFixture::start().await;
        let viewer = Viewer::from(root());

        fx.blocklists()
            .block_account(&root(), BlockScope::Account, &format!("user2@{REMOTE_HOST}"))
            .await
            .unwrap();
        fx.blocklists()
            .block_server(&root(), BlockScope::Instance, REMOTE_HOST)
            .await
            .unwrap();
        assert_eq!(fx.video_names(&viewer).await.len(), 2);

        // Lifting the server block leaves root's own account block in force.
        fx.blocklists()
            .unblock_server(&root(), BlockScope::Instance, REMOTE_HOST)
            .await
            .unwrap();
        let names = fx.video_names(&viewer).await;
        assert_eq!(names.len(), 3);
        assert!(!names.iter().any(|n| n == "video user 2"));
        assert_eq!(fx.video_names(&Viewer::from(moderator())).await.len(), 4);
    }

    #[tokio::test]
    async fn test_notifications_follow_the_instance_blocklist() {
        let fx = TwoServerFixture::start().await;
        let user1_id = AccountId::local("user1");

        fx.blocklists()
            .block_account(&root(), BlockScope::Instance, &format!("user2@{REMOTE_HOST}"))
            .await
            .unwrap();
        fx.blocklists()
            .block_account(&root(), BlockScope::Instance, "user1")
            .await
            .unwrap();
        fx.check_comment_notification(
            user1_id.clone(),
            "video server 1",
            "hidden comment",
            Expect::Absence,
        )
        .await;
        fx.check_comment_notification(user2(), "video server 1", &mention_root(), Expect::Absence)
            .await;

        fx.blocklists()
            .unblock_account(&root(), BlockScope::Instance, &format!("user2@{REMOTE_HOST}"))
            .await
            .unwrap();
        fx.blocklists()
            .unblock_account(&root(), BlockScope::Instance, "user1")
            .await
            .unwrap();
        fx.check_comment_notification(user1_id, "video server 1", "displayed comment", Expect::Presence)
            .await;
        fx.check_comment_notification(user2(), "video server 1", &mention_root(), Expect::Presence)
            .await;

        fx.blocklists()
            .block_server(&root(), BlockScope::Instance, REMOTE_HOST)
            .await
            .unwrap();
        fx.check_comment_notification(user2(), "video server 1", "hidden comment", Expect::Absence)
            .await;
    }
}
