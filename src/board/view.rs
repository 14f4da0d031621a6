//! Public projections of board documents.
//!
//! Views never carry `delete_password` or `reported`.

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::types::{Board, Reply, Thread};

/// Maximum number of threads in a board listing.
pub const RECENT_THREAD_LIMIT: usize = 10;

/// Maximum number of replies shown per thread in a board listing.
pub const RECENT_REPLY_LIMIT: usize = 3;

/// Redacted thread.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ThreadView {
    #[serde(rename = "_id")]
    pub id: String,
    pub text: String,
    pub created_on: DateTime<Utc>,
    pub bumped_on: DateTime<Utc>,
    pub replies: Vec<ReplyView>,
}

/// Redacted reply.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReplyView {
    #[serde(rename = "_id")]
    pub id: String,
    pub text: String,
    pub created_on: DateTime<Utc>,
}

impl From<&Reply> for ReplyView {
    fn from(reply: &Reply) -> Self {
        Self {
            id: reply.id.clone(),
            text: reply.text.clone(),
            created_on: reply.created_on,
        }
    }
}

impl ThreadView {
    fn with_replies(thread: &Thread, replies: Vec<ReplyView>) -> Self {
        Self {
            id: thread.id.clone(),
            text: thread.text.clone(),
            created_on: thread.created_on,
            bumped_on: thread.bumped_on,
            replies,
        }
    }

    /// Full view: every reply in posting order.
    pub fn full(thread: &Thread) -> Self {
        let replies = thread.replies.iter().map(ReplyView::from).collect();
        Self::with_replies(thread, replies)
    }

    /// Listing view: the newest replies first, capped at [`RECENT_REPLY_LIMIT`].
    pub fn summary(thread: &Thread) -> Self {
        let mut replies: Vec<&Reply> = thread.replies.iter().collect();
        replies.sort_by(|a, b| b.created_on.cmp(&a.created_on));
        let replies = replies
            .into_iter()
            .take(RECENT_REPLY_LIMIT)
            .map(ReplyView::from)
            .collect();
        Self::with_replies(thread, replies)
    }
}

/// The most recently bumped threads of a board, newest first.
///
/// Sorting is stable, so threads bumped at the same instant keep their
/// storage order.
pub fn recent_threads(board: &Board) -> Vec<ThreadView> {
    let mut threads: Vec<&Thread> = board.threads.iter().collect();
    threads.sort_by(|a, b| b.bumped_on.cmp(&a.bumped_on));
    threads
        .into_iter()
        .take(RECENT_THREAD_LIMIT)
        .map(ThreadView::summary)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(secs: i64) -> DateTime<Utc> {
        DateTime::from_timestamp(1_700_000_000 + secs, 0).unwrap()
    }

    #[test]
    fn test_view_is_redacted() {
        let mut thread = Thread::new("hello", "secret", at(0));
        thread.report();
        let reply_id = thread.add_reply(Reply::new("hi", "rsecret", at(1)));
        thread.reply_mut(&reply_id).unwrap().report();

        let json = serde_json::to_value(ThreadView::full(&thread)).unwrap();
        let object = json.as_object().unwrap();
        assert!(!object.contains_key("delete_password"));
        assert!(!object.contains_key("reported"));
        assert_eq!(object["_id"], thread.id.as_str());

        let reply = json["replies"][0].as_object().unwrap();
        assert!(!reply.contains_key("delete_password"));
        assert!(!reply.contains_key("reported"));
        assert_eq!(reply.len(), 3);
    }

    #[test]
    fn test_summary_caps_and_orders_replies() {
        let mut thread = Thread::new("hello", "pw", at(0));
        for i in 1..=5 {
            thread.add_reply(Reply::new(format!("reply {i}"), "pw", at(i)));
        }

        let view = ThreadView::summary(&thread);
        let texts: Vec<&str> = view.replies.iter().map(|r| r.text.as_str()).collect();
        assert_eq!(texts, vec!["reply 5", "reply 4", "reply 3"]);
    }

    #[test]
    fn test_full_keeps_all_replies_in_order() {
        let mut thread = Thread::new("hello", "pw", at(0));
        for i in 1..=5 {
            thread.add_reply(Reply::new(format!("reply {i}"), "pw", at(i)));
        }

        let view = ThreadView::full(&thread);
        assert_eq!(view.replies.len(), 5);
        assert_eq!(view.replies[0].text, "reply 1");
        assert_eq!(view.replies[4].text, "reply 5");
    }

    #[test]
    fn test_recent_threads_caps_and_orders_by_bump() {
        let mut board = Board::new("general");
        for i in 0..12 {
            board.add_thread(Thread::new(format!("thread {i}"), "pw", at(i)));
        }

        let views = recent_threads(&board);
        assert_eq!(views.len(), RECENT_THREAD_LIMIT);
        assert_eq!(views[0].text, "thread 11");
        assert_eq!(views[9].text, "thread 2");
        assert!(views.windows(2).all(|w| w[0].bumped_on >= w[1].bumped_on));
    }

    #[test]
    fn test_reply_bumps_thread_to_top() {
        let mut board = Board::new("general");
        let old = board.add_thread(Thread::new("old", "pw", at(0)));
        board.add_thread(Thread::new("new", "pw", at(10)));

        board
            .thread_mut(&old)
            .unwrap()
            .add_reply(Reply::new("bump", "pw", at(20)));

        let views = recent_threads(&board);
        assert_eq!(views[0].text, "old");
        assert_eq!(views[1].text, "new");
    }

    #[test]
    fn test_recent_threads_ties_keep_storage_order() {
        let mut board = Board::new("general");
        board.add_thread(Thread::new("first", "pw", at(0)));
        board.add_thread(Thread::new("second", "pw", at(0)));

        let views = recent_threads(&board);
        assert_eq!(views[0].text, "first");
        assert_eq!(views[1].text, "second");
    }

    #[test]
    fn test_recent_threads_empty_board() {
        assert!(recent_threads(&Board::new("empty")).is_empty());
    }
}
