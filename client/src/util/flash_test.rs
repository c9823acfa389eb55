use super::*;

#[test]
fn error_flash_carries_message() {
    let err = portal::RequestError::backend(400, "Título obrigatório");
    let flash = Flash::error("Erro ao criar evento", &err);
    assert_eq!(flash.kind, FlashKind::Error);
    assert_eq!(flash.detail.as_deref(), Some("Título obrigatório"));
}

#[test]
fn kinds_map_to_modifier_classes() {
    assert_eq!(FlashKind::Success.class(), "flash flash--success");
    assert_eq!(FlashKind::Error.class(), "flash flash--error");
}

#[test]
fn with_detail_sets_detail() {
    let flash = Flash::success("Backup criado").with_detail("Arquivo: backup.json");
    assert_eq!(flash.detail.as_deref(), Some("Arquivo: backup.json"));
}
