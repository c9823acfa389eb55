use super::*;

#[test]
fn check_image_accepts_small_images() {
    assert_eq!(check_image("image/png", 1024), Ok(()));
}

#[test]
fn check_image_rejects_other_types() {
    assert_eq!(check_image("application/pdf", 10), Err("Selecione um arquivo de imagem".to_owned()));
}

#[test]
fn check_image_rejects_large_files() {
    assert_eq!(
        check_image("image/jpeg", MAX_IMAGE_BYTES + 1),
        Err("A imagem deve ter no máximo 5.0 MB".to_owned())
    );
}
