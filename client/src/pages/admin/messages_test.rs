use super::*;

fn message(assunto: &str) -> ContactMessage {
    ContactMessage {
        id: "1".to_owned(),
        nome: "Rui".to_owned(),
        email: "rui@example.com".to_owned(),
        assunto: assunto.to_owned(),
        mensagem: "Olá".to_owned(),
        data_envio: None,
        lida: false,
        respondida: false,
    }
}

#[test]
fn reply_uses_subject() {
    assert_eq!(reply_href(&message("Parceria")), "mailto:rui@example.com?subject=Re%3A%20Parceria");
}

#[test]
fn reply_without_subject_uses_default() {
    assert_eq!(
        reply_href(&message("  ")),
        "mailto:rui@example.com?subject=Contato%20Blockchain%20Insper"
    );
}
