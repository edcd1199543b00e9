use super::*;

#[test]
fn new_task_is_alive_until_cancelled() {
    let task = RepeatingTask::spawn(Duration::from_secs(1), || {});
    assert!(task.alive.load(Ordering::Relaxed));
    task.cancel();
    assert!(!task.alive.load(Ordering::Relaxed));
}

#[test]
fn dropping_the_handle_cancels() {
    let task = RepeatingTask::spawn(Duration::from_secs(30), || {});
    let alive = Arc::clone(&task.alive);
    drop(task);
    assert!(!alive.load(Ordering::Relaxed));
}
