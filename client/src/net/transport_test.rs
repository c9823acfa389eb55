use super::*;

#[test]
fn network_failed_message_names_method_and_url() {
    assert_eq!(
        network_failed_message(Method::Put, "http://localhost:5000/api/eventos/1", "offline"),
        "PUT http://localhost:5000/api/eventos/1 failed: offline"
    );
}
