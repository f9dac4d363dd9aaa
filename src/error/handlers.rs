//! Error handlers
//!
//! Converts errors into the messages shown to the person at the form.

use crate::error::types::{AuthError, PortalError};
use log::error;

/// Generic message for failures the user cannot act on
pub const SERVER_ERROR_MESSAGE: &str = "Error en el servidor. Intente nuevamente.";

/// Log a portal error
pub fn handle_error(err: &PortalError) {
    error!("Portal error: {}", err);
}

/// Convert an authentication error to its user-visible message
pub fn auth_error_message(err: &AuthError) -> &'static str {
    match err {
        AuthError::UserNotFound(_) => "Usuario no encontrado.",
        AuthError::WrongPassword(_) => "Contraseña incorrecta.",
        AuthError::MissingField(_) => "Por favor, complete todos los campos",
        AuthError::InvalidPeriod(_) => "Por favor, seleccione un período válido",
    }
}

/// Convert any portal error to its user-visible message
pub fn error_to_message(err: &PortalError) -> String {
    match err {
        PortalError::Auth(e) => auth_error_message(e).to_string(),
        PortalError::InvalidForm => "Formulario no válido".to_string(),
        PortalError::MissingCode => {
            "Por favor, ingrese un código de inscripción válido".to_string()
        }
        PortalError::CodeTooShort(min) => {
            format!("El código debe tener al menos {} caracteres", min)
        }
        PortalError::Backend(_) => SERVER_ERROR_MESSAGE.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auth_messages() {
        assert_eq!(
            error_to_message(&AuthError::UserNotFound("x".into()).into()),
            "Usuario no encontrado."
        );
        assert_eq!(
            error_to_message(&AuthError::WrongPassword("x".into()).into()),
            "Contraseña incorrecta."
        );
        assert_eq!(
            error_to_message(&AuthError::InvalidPeriod("0".into()).into()),
            "Por favor, seleccione un período válido"
        );
    }

    #[test]
    fn test_code_messages() {
        assert_eq!(
            error_to_message(&PortalError::CodeTooShort(6)),
            "El código debe tener al menos 6 caracteres"
        );
        assert_eq!(
            error_to_message(&PortalError::MissingCode),
            "Por favor, ingrese un código de inscripción válido"
        );
    }

    #[test]
    fn test_backend_errors_are_generic() {
        let err = PortalError::Backend("connection reset".into());
        assert_eq!(error_to_message(&err), SERVER_ERROR_MESSAGE);
    }
}
