use super::*;

#[test]
fn from_result_keeps_error_message() {
    let remote: Remote<u32> = Remote::from_result(Err::<u32, _>("Evento não encontrado"));
    assert_eq!(remote.error(), Some("Evento não encontrado"));
    assert!(remote.ready().is_none());
}

#[test]
fn default_is_loading() {
    assert!(Remote::<Vec<u8>>::default().is_loading());
}

#[test]
fn items_are_empty_until_ready() {
    assert!(Remote::<Vec<u8>>::Loading.items().is_empty());
    assert_eq!(Remote::Ready(vec![1, 2]).items(), vec![1, 2]);
}

#[test]
fn update_ready_only_touches_loaded_values() {
    let mut loaded = Remote::Ready(vec![1]);
    loaded.update_ready(|v| v.push(2));
    assert_eq!(loaded, Remote::Ready(vec![1, 2]));

    let mut failed: Remote<Vec<u8>> = Remote::Failed("x".to_owned());
    failed.update_ready(|v| v.push(2));
    assert_eq!(failed.error(), Some("x"));
}
