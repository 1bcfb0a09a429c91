use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, Eq, PartialEq, Serialize, Deserialize)]
pub enum Locale {
    #[default]
    #[serde(rename = "pt-br")]
    PtBr,
    #[serde(rename = "en")]
    En,
}

impl Locale {
    pub fn messages(self) -> &'static Messages {
        match self {
            Locale::PtBr => &PT_BR,
            Locale::En => &EN,
        }
    }
}

/// User-facing strings for validation errors and notices.
#[derive(Debug)]
pub struct Messages {
    pub name_required: &'static str,
    pub email_required: &'static str,
    pub email_invalid: &'static str,
    pub field_required: &'static str,
    pub password_too_short: &'static str,
    pub confirmation_mismatch: &'static str,
    pub updated_title: &'static str,
    pub updated_body: &'static str,
    pub failed_title: &'static str,
    pub failed_body: &'static str,
}

static PT_BR: Messages = Messages {
    name_required: "O nome é obrigatório",
    email_required: "O e-mail é obrigatório",
    email_invalid: "Digite um e-mail válido",
    field_required: "Campo obrigatório",
    password_too_short: "A senha deve conter no mínimo 6 dígitos",
    confirmation_mismatch: "Confirmação incorreta",
    updated_title: "Perfil atualizado com sucesso!",
    updated_body: "Seus dados foram atualizados.",
    failed_title: "Erro na atualização do perfil",
    failed_body: "Ocorreu um erro ao atualizar o perfil, tente novamente.",
};

static EN: Messages = Messages {
    name_required: "Name is required",
    email_required: "Email is required",
    email_invalid: "Enter a valid email",
    field_required: "Required field",
    password_too_short: "Password must be at least 6 characters long",
    confirmation_mismatch: "Confirmation does not match",
    updated_title: "Profile updated!",
    updated_body: "Your details have been updated.",
    failed_title: "Profile update failed",
    failed_body: "Something went wrong while updating your profile, please try again.",
};
