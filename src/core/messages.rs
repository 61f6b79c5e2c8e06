//! User-facing text.
//!
//! A fixed label table per supported locale. Outcome variants carry no
//! text of their own; they are rendered through [`Labels::outcome`].

use std::str::FromStr;

use clap::ValueEnum;
use serde::Deserialize;

use crate::core::domain::{IdentifierMode, Outcome};
use crate::error::ConfigError;

/// Supported display languages.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Deserialize)]
#[serde(try_from = "String")]
pub enum Locale {
    #[default]
    En,
    Ru,
}

impl Locale {
    /// Label table for this locale
    pub fn labels(&self) -> &'static Labels {
        match self {
            Locale::En => &EN,
            Locale::Ru => &RU,
        }
    }
}

impl FromStr for Locale {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "en" => Ok(Locale::En),
            "ru" => Ok(Locale::Ru),
            other => Err(ConfigError::InvalidLocale(other.to_string())),
        }
    }
}

impl TryFrom<String> for Locale {
    type Error = ConfigError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Every string the login screen shows.
#[derive(Debug)]
pub struct Labels {
    pub welcome: &'static str,
    pub phone: &'static str,
    pub document: &'static str,
    pub phone_number: &'static str,
    pub document_number: &'static str,
    pub password: &'static str,
    pub submit: &'static str,
    pub forgot_password: &'static str,
    pub no_account: &'static str,
    pub register: &'static str,
    pub identifier_error: &'static str,
    pub password_error: &'static str,
    pub success: &'static str,
    pub wrong_password: &'static str,
    pub not_registered: &'static str,
}

impl Labels {
    /// Message shown after an authentication attempt
    pub fn outcome(&self, outcome: Outcome) -> &'static str {
        match outcome {
            Outcome::Success => self.success,
            Outcome::WrongSecret => self.wrong_password,
            Outcome::IdentifierNotFound => self.not_registered,
        }
    }

    /// Segment title for a mode
    pub fn mode(&self, mode: IdentifierMode) -> &'static str {
        match mode {
            IdentifierMode::Phone => self.phone,
            IdentifierMode::Document => self.document,
        }
    }

    /// Placeholder of the identifier field for a mode
    pub fn identifier_placeholder(&self, mode: IdentifierMode) -> &'static str {
        match mode {
            IdentifierMode::Phone => self.phone_number,
            IdentifierMode::Document => self.document_number,
        }
    }
}

static EN: Labels = Labels {
    welcome: "Hi!\nSign in to Beta-Bank",
    phone: "Phone",
    document: "Document",
    phone_number: "Phone number",
    document_number: "Document number",
    password: "Password",
    submit: "Continue",
    forgot_password: "Forgot password?",
    no_account: "Don't have an account?",
    register: "Sign up",
    identifier_error: "Incorrect identifier entered",
    password_error: "Password must contain 6 to 20 characters",
    success: "Successful authorization",
    wrong_password: "Wrong password",
    not_registered: "This identifier is not registered in the system",
};

static RU: Labels = Labels {
    welcome: "Привет!\nВойдите в Бэта-Банк",
    phone: "Телефон",
    document: "Документ",
    phone_number: "Номер телефона",
    document_number: "Номер документа",
    password: "Пароль",
    submit: "Вперед",
    forgot_password: "Забыли пароль?",
    no_account: "У вас нет аккаунта?",
    register: "Зарегистрируйтесь",
    identifier_error: "Введен некорректный идентификатор",
    password_error: "Пароль должен содержать от 6 до 20 символов",
    success: "Успешная авторизация",
    wrong_password: "Неверный пароль",
    not_registered: "Такой документ не зарегистрирован в системе",
};
