//! Unit tests for memory: RunnableConfig, Checkpoint, MemorySaver.

use flowgraph::{
    Checkpoint, CheckpointError, CheckpointMetadata, CheckpointSource, Checkpointer, MemorySaver,
    RunnableConfig,
};

#[derive(Debug, Clone, Default)]
struct TestState {
    value: String,
}

fn checkpoint(id: &str, value: &str, step: u64) -> Checkpoint<TestState> {
    Checkpoint {
        id: id.into(),
        ts: "123".into(),
        channel_values: TestState {
            value: value.into(),
        },
        metadata: CheckpointMetadata {
            source: CheckpointSource::Update,
            step,
            created_at: None,
        },
    }
}

#[tokio::test]
async fn memory_saver_put_and_get_tuple() {
    let saver: MemorySaver<TestState> = MemorySaver::new();
    let config = RunnableConfig::for_thread("t1");

    let id = saver.put(&config, &checkpoint("c1", "hello", 0)).await.unwrap();
    assert_eq!(id, "c1");

    let (cp, meta) = saver.get_tuple(&config).await.unwrap().unwrap();
    assert_eq!(cp.id, "c1");
    assert_eq!(cp.channel_values.value, "hello");
    assert_eq!(meta.step, 0);
}

#[tokio::test]
async fn memory_saver_get_tuple_empty_returns_none() {
    let saver: MemorySaver<TestState> = MemorySaver::new();
    let config = RunnableConfig::for_thread("t2");
    assert!(saver.get_tuple(&config).await.unwrap().is_none());
}

#[tokio::test]
async fn memory_saver_returns_latest_checkpoint() {
    let saver: MemorySaver<TestState> = MemorySaver::new();
    let config = RunnableConfig::for_thread("t1");

    saver.put(&config, &checkpoint("c1", "one", 0)).await.unwrap();
    saver.put(&config, &checkpoint("c2", "two", 1)).await.unwrap();

    let (cp, _) = saver.get_tuple(&config).await.unwrap().unwrap();
    assert_eq!(cp.id, "c2");
    assert_eq!(cp.channel_values.value, "two");
}

#[tokio::test]
async fn memory_saver_honors_checkpoint_id() {
    let saver: MemorySaver<TestState> = MemorySaver::new();
    let config = RunnableConfig::for_thread("t1");

    saver.put(&config, &checkpoint("c1", "one", 0)).await.unwrap();
    saver.put(&config, &checkpoint("c2", "two", 1)).await.unwrap();

    let pinned = RunnableConfig {
        checkpoint_id: Some("c1".into()),
        ..config
    };
    let (cp, _) = saver.get_tuple(&pinned).await.unwrap().unwrap();
    assert_eq!(cp.channel_values.value, "one");
}

#[tokio::test]
async fn memory_saver_list_is_oldest_first_and_limited() {
    let saver: MemorySaver<TestState> = MemorySaver::new();
    let config = RunnableConfig::for_thread("t1");

    saver.put(&config, &checkpoint("c1", "one", 0)).await.unwrap();
    saver.put(&config, &checkpoint("c2", "two", 1)).await.unwrap();
    saver.put(&config, &checkpoint("c3", "three", 2)).await.unwrap();

    let all = saver.list(&config, None).await.unwrap();
    let ids: Vec<&str> = all.iter().map(|i| i.checkpoint_id.as_str()).collect();
    assert_eq!(ids, vec!["c1", "c2", "c3"]);

    let limited = saver.list(&config, Some(2)).await.unwrap();
    assert_eq!(limited.len(), 2);
    assert_eq!(limited[0].checkpoint_id, "c1");
}

#[tokio::test]
async fn memory_saver_list_returns_empty_when_no_checkpoints() {
    let saver: MemorySaver<TestState> = MemorySaver::new();
    let config = RunnableConfig::for_thread("t3");
    assert!(saver.list(&config, None).await.unwrap().is_empty());
}

#[tokio::test]
async fn memory_saver_requires_thread_id() {
    let saver: MemorySaver<TestState> = MemorySaver::new();
    let config = RunnableConfig::default();

    let err = saver.put(&config, &checkpoint("c1", "one", 0)).await.unwrap_err();
    assert!(matches!(err, CheckpointError::ThreadIdRequired));
}

#[tokio::test]
async fn memory_saver_namespaces_do_not_collide() {
    let saver: MemorySaver<TestState> = MemorySaver::new();
    let plain = RunnableConfig::for_thread("t1");
    let namespaced = RunnableConfig {
        checkpoint_ns: "sub".into(),
        ..RunnableConfig::for_thread("t1")
    };

    saver.put(&plain, &checkpoint("c1", "root", 0)).await.unwrap();
    assert!(saver.get_tuple(&namespaced).await.unwrap().is_none());
}

#[tokio::test]
async fn checkpoint_from_state_fills_id_and_metadata() {
    let state = TestState {
        value: "test".into(),
    };
    let cp = Checkpoint::from_state(state, CheckpointSource::Loop, 1);
    assert!(!cp.id.is_empty());
    assert!(!cp.ts.is_empty());
    assert_eq!(cp.channel_values.value, "test");
    assert_eq!(cp.metadata.step, 1);
}
