use profilectl::profile::{Field, Locale, Messages, ProfileFormData, validate};

fn messages() -> &'static Messages {
    Locale::PtBr.messages()
}

fn valid_form() -> ProfileFormData {
    ProfileFormData {
        name: "Ana Souza".to_string(),
        email: "ana@example.com".to_string(),
        ..ProfileFormData::default()
    }
}

#[test]
fn accepts_identity_only_change() {
    let valid = validate(&valid_form(), messages()).expect("form should pass");
    assert_eq!(valid.name(), "Ana Souza");
    assert!(!valid.changes_password());
}

#[test]
fn trims_name_and_email() {
    let form = ProfileFormData {
        name: "  Ana  ".to_string(),
        email: " ana@example.com ".to_string(),
        ..ProfileFormData::default()
    };

    let valid = validate(&form, messages()).expect("form should pass");
    assert_eq!(valid.name(), "Ana");
    assert_eq!(valid.email(), "ana@example.com");
}

#[test]
fn requires_new_password_when_old_is_given() {
    let form = ProfileFormData {
        old_password: "abc123".to_string(),
        password: String::new(),
        ..valid_form()
    };

    let errors = validate(&form, messages()).expect_err("form should be rejected");
    assert_eq!(errors.get(Field::Password), Some("Campo obrigatório"));
}

#[test]
fn reports_confirmation_mismatch() {
    let form = ProfileFormData {
        old_password: "abc123".to_string(),
        password: "secret".to_string(),
        password_confirmation: "secre".to_string(),
        ..valid_form()
    };

    let errors = validate(&form, messages()).expect_err("form should be rejected");
    assert!(!errors.contains(Field::Password));
    assert!(errors.contains(Field::PasswordConfirmation));

    let form = ProfileFormData {
        password_confirmation: "secreT".to_string(),
        ..form
    };
    let errors = validate(&form, messages()).expect_err("form should be rejected");
    assert_eq!(
        errors.get(Field::PasswordConfirmation),
        Some("Confirmação incorreta")
    );
}

#[test]
fn collects_every_failing_field() {
    let form = ProfileFormData {
        name: String::new(),
        email: "not-an-email".to_string(),
        ..ProfileFormData::default()
    };

    let errors = validate(&form, messages()).expect_err("form should be rejected");
    assert_eq!(errors.len(), 2);
    assert_eq!(errors.get(Field::Name), Some("O nome é obrigatório"));
    assert_eq!(errors.get(Field::Email), Some("Digite um e-mail válido"));
}

#[test]
fn blank_name_counts_as_missing() {
    let form = ProfileFormData {
        name: "   ".to_string(),
        ..valid_form()
    };

    let errors = validate(&form, messages()).expect_err("form should be rejected");
    assert!(errors.contains(Field::Name));
}

#[test]
fn short_new_password_is_rejected() {
    let form = ProfileFormData {
        old_password: "abc123".to_string(),
        password: "12345".to_string(),
        password_confirmation: "12345".to_string(),
        ..valid_form()
    };

    let errors = validate(&form, messages()).expect_err("form should be rejected");
    assert_eq!(
        errors.get(Field::Password),
        Some("A senha deve conter no mínimo 6 dígitos")
    );
    assert_eq!(
        errors.get(Field::PasswordConfirmation),
        Some("A senha deve conter no mínimo 6 dígitos")
    );
}

#[test]
fn passwords_are_free_without_old_password() {
    let form = ProfileFormData {
        password: "123".to_string(),
        password_confirmation: "123".to_string(),
        ..valid_form()
    };

    assert!(validate(&form, messages()).is_ok());
}

#[test]
fn confirmation_must_match_even_without_old_password() {
    let form = ProfileFormData {
        password: "secret1".to_string(),
        ..valid_form()
    };

    let errors = validate(&form, messages()).expect_err("form should be rejected");
    assert_eq!(errors.len(), 1);
    assert!(errors.contains(Field::PasswordConfirmation));
}

#[test]
fn old_password_is_never_flagged() {
    let form = ProfileFormData {
        old_password: "x".to_string(),
        password: "secret1".to_string(),
        password_confirmation: "secret1".to_string(),
        ..valid_form()
    };

    let valid = validate(&form, messages()).expect("form should pass");
    assert!(valid.changes_password());
    assert_eq!(valid.old_password(), "x");
}

#[test]
fn english_messages_keep_field_association() {
    let errors = validate(&ProfileFormData::default(), Locale::En.messages())
        .expect_err("form should be rejected");
    assert_eq!(errors.get(Field::Name), Some("Name is required"));
    assert_eq!(errors.get(Field::Email), Some("Email is required"));
}
