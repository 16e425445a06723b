//! User-facing notices raised by the views

use std::fmt;

/// Generic message shown when a mutation fails
///
/// Details go to the log; guests only see one of these.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    ConfirmationFailed,
    ReservationFailed,
    RemovalFailed,
    MessageFailed,
}

impl Notice {
    pub fn message(&self) -> &'static str {
        match self {
            Self::ConfirmationFailed => {
                "Error al actualizar la confirmación. Por favor intenta de nuevo."
            }
            Self::ReservationFailed => "Error al reservar el regalo. Por favor intenta de nuevo.",
            Self::RemovalFailed => "Error al eliminar la reserva. Por favor intenta de nuevo.",
            Self::MessageFailed => "Error al enviar el mensaje. Por favor intenta de nuevo.",
        }
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

impl std::error::Error for Notice {}
