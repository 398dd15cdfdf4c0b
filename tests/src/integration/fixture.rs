//! # Two-Server Fixture
//!
//! ```text
//! localhost:9001 (home)              localhost:9002 (remote)
//! ├── root (administrator)           ├── root
//! │   └── "video server 1"           │   └── "video server 2"
//! ├── user1                          └── user2
//! │   └── "video user 1"                 └── "video user 2"
//! └── moderator
//! ```
//!
//! Comments on "video server 1":
//!
//! ```text
//! [1] root  "comment root 1"
//!     └── [2] user1 "comment user 1"
//!         └── [3] root "comment root 1"
//! [4] user1 "comment user 1"
//!     └── [5] root "comment root 1"
//! ```

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

use fb_01_block_registry::SteppingTimeSource;
use fb_03_visibility_filter::{ThreadSummary, VisibilityApi};
use fb_runtime::container::subsystems::ConcreteHandler;
use fb_runtime::{EngineConfig, EngineContainer, EngineRuntime};
use shared_bus::{EventFilter, EventTopic, FederationEvent, FederationJob, Subscription};
use shared_types::{
    AccountId, CommentActivity, CommentId, CommentNode, Host, Page, PageRequest, Principal, Role,
    Video, Viewer,
};
use tokio::time::timeout;
use uuid::Uuid;

pub const LOCAL_HOST: &str = "localhost:9001";
pub const REMOTE_HOST: &str = "localhost:9002";

/// Ids below this are used by the stored comment trees.
const FIRST_JOB_COMMENT_ID: u64 = 100;

pub fn local_host() -> Host {
    Host::parse(LOCAL_HOST).unwrap()
}

pub fn remote_host() -> Host {
    Host::parse(REMOTE_HOST).unwrap()
}

pub fn user2() -> AccountId {
    AccountId::remote("user2", remote_host())
}

pub fn remote_root() -> AccountId {
    AccountId::remote("root", remote_host())
}

pub fn root() -> Principal {
    Principal::new(AccountId::local("root"), Role::Administrator)
}

pub fn user1() -> Principal {
    Principal::user(AccountId::local("user1"))
}

pub fn moderator() -> Principal {
    Principal::new(AccountId::local("moderator"), Role::Moderator)
}

/// Whether a notification is expected in root's feed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Expect {
    Presence,
    Absence,
}

pub struct TwoServerFixture {
    pub runtime: EngineRuntime<SteppingTimeSource>,
    pub engine: Arc<EngineContainer<SteppingTimeSource>>,
    pub videos: Vec<Video>,
    /// Threads of "video server 1".
    pub threads: Vec<CommentNode>,
    next_comment: AtomicU64,
}

impl TwoServerFixture {
    pub async fn start() -> Self {
        Self::start_with(|_| {}).await
    }

    /// Like [`Self::start`], with `configure` applied to the engine config.
    pub async fn start_with(configure: impl FnOnce(&mut EngineConfig)) -> Self {
        let mut config = EngineConfig::for_host(local_host());
        configure(&mut config);
        let container =
            EngineContainer::with_clock(config, Arc::new(SteppingTimeSource::new(1_000, 1)))
                .unwrap();

        let directory = &container.directory;
        directory.register(AccountId::local("root"));
        directory.register(AccountId::local("user1"));
        directory.register(AccountId::local("moderator"));
        directory.register(user2());
        directory.register(remote_root());

        let videos = vec![
            Video::new("video user 1", AccountId::local("user1"), 1),
            Video::new("video user 2", user2(), 2),
            Video::new("video server 1", AccountId::local("root"), 3),
            Video::new("video server 2", remote_root(), 4),
        ];
        let threads = comment_threads(videos[2].id);

        let runtime = EngineRuntime::from_container(container);
        runtime.start().await.unwrap();
        let engine = runtime.container();

        Self {
            runtime,
            engine,
            videos,
            threads,
            next_comment: AtomicU64::new(FIRST_JOB_COMMENT_ID),
        }
    }

    pub fn blocklists(&self) -> &ConcreteHandler<SteppingTimeSource> {
        &self.engine.blocklists
    }

    pub fn video(&self, name: &str) -> &Video {
        self.videos.iter().find(|v| v.name == name).unwrap()
    }

    /// Names of the videos `viewer` can list.
    pub async fn video_names(&self, viewer: &Viewer) -> Vec<String> {
        let page = self
            .engine
            .visibility
            .visible_videos(viewer, &self.videos, PageRequest::new(0, 25))
            .await
            .unwrap();
        assert_eq!(page.total, page.data.len());
        page.data.into_iter().map(|v| v.name).collect()
    }

    pub async fn thread_list(&self, viewer: &Viewer) -> Page<ThreadSummary> {
        self.engine
            .visibility
            .visible_threads(viewer, &self.threads, PageRequest::new(0, 25))
            .await
            .unwrap()
    }

    /// Direct replies visible under thread `id`.
    pub async fn thread_children(&self, viewer: &Viewer, id: CommentId) -> usize {
        let root = self.threads.iter().find(|t| t.id == id).unwrap();
        self.engine
            .visibility
            .thread_detail(viewer, root)
            .await
            .unwrap()
            .map(|view| view.root.children.len())
            .unwrap()
    }

    /// All four videos for `viewer` and for an anonymous visitor.
    pub async fn check_all_videos(&self, viewer: &Viewer) {
        assert_eq!(self.video_names(viewer).await.len(), 4);
        assert_eq!(self.video_names(&Viewer::Anonymous).await.len(), 4);
    }

    /// Both threads, each with its single direct reply.
    pub async fn check_all_comments(&self, viewer: &Viewer) {
        let list = self.thread_list(viewer).await;
        let live: Vec<&ThreadSummary> = list.data.iter().filter(|t| !t.deleted).collect();
        assert_eq!(live.len(), 2);

        for thread in live {
            assert_eq!(self.thread_children(viewer, thread.id).await, 1);
        }
    }

    /// A new-comment job by `author` on `video_name`, with a fresh comment id.
    pub fn comment_job(&self, author: AccountId, video_name: &str, text: &str) -> CommentActivity {
        let video = self.video(video_name).clone();
        let comment_id = CommentId(self.next_comment.fetch_add(1, Ordering::SeqCst));
        CommentActivity {
            comment_id,
            video_id: video.id,
            video_owner: video.owner,
            author,
            text: text.to_string(),
            in_reply_to: None,
            created_at: comment_id.0,
        }
    }

    /// Runs a comment job through the worker and checks root's notification
    /// feed for that comment.
    pub async fn check_comment_notification(
        &self,
        author: AccountId,
        video_name: &str,
        text: &str,
        expect: Expect,
    ) {
        let activity = self.comment_job(author, video_name, text);
        let comment_id = activity.comment_id;
        let label = FederationJob::CommentCreated(activity.clone()).label();

        let mut outcomes = self.engine.event_bus.subscribe(EventFilter::topics(vec![
            EventTopic::Jobs,
            EventTopic::DeadLetterQueue,
        ]));
        self.engine.submit_comment(activity).await.unwrap();
        wait_for_job(&mut outcomes, &label).await;

        let feed = self
            .engine
            .notification_sink
            .feed(&AccountId::local("root"), PageRequest::new(0, 30));
        let matching = feed
            .data
            .iter()
            .filter(|n| n.comment_id == comment_id)
            .count();

        match expect {
            Expect::Presence => assert_eq!(matching, 1, "expected a notification for {comment_id:?}"),
            Expect::Absence => assert_eq!(matching, 0, "unexpected notification for {comment_id:?}"),
        }
    }
}

/// Waits until the worker reports job `label` as completed.
async fn wait_for_job(outcomes: &mut Subscription, label: &str) {
    loop {
        let event = timeout(Duration::from_secs(2), outcomes.recv())
            .await
            .expect("timeout waiting for the notification worker")
            .expect("bus closed");
        match event {
            FederationEvent::JobCompleted { job, .. } if job == label => return,
            FederationEvent::JobFailed { job, error, .. } if job == label => {
                panic!("job {job} failed: {error}")
            }
            _ => {}
        }
    }
}

fn comment_threads(video_id: Uuid) -> Vec<CommentNode> {
    let root = AccountId::local("root");
    let user1 = AccountId::local("user1");

    let first = CommentNode::root(CommentId(1), video_id, root.clone(), "comment root 1", 10);
    let reply = CommentNode::reply_to(&first, CommentId(2), user1.clone(), "comment user 1", 11);
    let nested = CommentNode::reply_to(&reply, CommentId(3), root.clone(), "comment root 1", 12);
    let first = first.with_reply(reply.with_reply(nested));

    let second = CommentNode::root(CommentId(4), video_id, user1, "comment user 1", 13);
    let answer = CommentNode::reply_to(&second, CommentId(5), root, "comment root 1", 14);
    let second = second.with_reply(answer);

    vec![first, second]
}
