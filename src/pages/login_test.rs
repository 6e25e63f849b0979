use super::*;

#[test]
fn accepts_well_formed_email() {
    assert!(is_valid_email("admin@example.com"));
    assert!(is_valid_email("a@b.co"));
}

#[test]
fn rejects_malformed_emails() {
    assert!(!is_valid_email(""));
    assert!(!is_valid_email("sem-arroba.com"));
    assert!(!is_valid_email("@dominio.com"));
    assert!(!is_valid_email("user@semponto"));
    assert!(!is_valid_email("user @example.com"));
}

#[test]
fn valid_credentials_pass_through() {
    let credentials = validate_login("admin@example.com", "Secret123").unwrap();
    assert_eq!(credentials.email, "admin@example.com");
    assert_eq!(credentials.password, "Secret123");
}

#[test]
fn empty_fields_populate_required_errors() {
    let errors = validate_login("", "").unwrap_err();
    assert_eq!(errors.email, Some("Email é obrigatório"));
    assert_eq!(errors.password, Some("Senha é obrigatória"));
}

#[test]
fn malformed_email_is_flagged() {
    let errors = validate_login("invalido", "Secret123").unwrap_err();
    assert_eq!(errors.email, Some("Email inválido"));
    assert_eq!(errors.password, None);
}

#[test]
fn short_password_is_flagged() {
    let errors = validate_login("admin@example.com", "12345").unwrap_err();
    assert_eq!(errors.email, None);
    assert_eq!(errors.password, Some("Senha deve ter pelo menos 6 caracteres"));
}
