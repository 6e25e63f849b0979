use super::*;

#[test]
fn strong_password_needs_all_three_classes() {
    assert!(password_is_strong("Secret123"));
    assert!(!password_is_strong("secret123"));
    assert!(!password_is_strong("SECRET123"));
    assert!(!password_is_strong("SecretOnly"));
}

#[test]
fn valid_registration_passes_through_with_trimmed_name() {
    let data =
        validate_register("nova@example.com", "  Nova Conta  ", "Secret123", "Secret123").unwrap();
    assert_eq!(data.full_name, "Nova Conta");
}

#[test]
fn empty_form_flags_every_field() {
    let errors = validate_register("", "", "", "").unwrap_err();
    assert_eq!(errors.email, Some("Email é obrigatório"));
    assert_eq!(errors.full_name, Some("Nome completo é obrigatório"));
    assert_eq!(errors.password, Some("Senha é obrigatória"));
    assert_eq!(errors.confirm, Some("Confirmação de senha é obrigatória"));
}

#[test]
fn short_name_is_flagged() {
    let errors = validate_register("a@b.co", "X", "Secret123", "Secret123").unwrap_err();
    assert_eq!(errors.full_name, Some("Nome deve ter pelo menos 2 caracteres"));
}

#[test]
fn short_password_is_flagged_before_strength() {
    let errors = validate_register("a@b.co", "Nova", "Ab1", "Ab1").unwrap_err();
    assert_eq!(errors.password, Some("Senha deve ter pelo menos 8 caracteres"));
}

#[test]
fn weak_password_is_flagged() {
    let errors = validate_register("a@b.co", "Nova", "semdigitos", "semdigitos").unwrap_err();
    assert_eq!(
        errors.password,
        Some("Senha deve conter pelo menos uma letra maiúscula, uma minúscula e um número")
    );
}

#[test]
fn mismatched_confirmation_is_flagged() {
    let errors = validate_register("a@b.co", "Nova", "Secret123", "Secret124").unwrap_err();
    assert_eq!(errors.confirm, Some("Senhas não coincidem"));
}
