//! src/mail/send_email.rs

use std::fmt::Formatter;
use std::io::Write;

use crate::domain::{CustomerEmail, CustomerName};
use crate::utils::error_helpers::error_chain_fmt;

#[derive(thiserror::Error)]
#[error("Failed to send notification email to {recipient}")]
pub struct SendEmailError {
    recipient: String,
    #[source]
    source: std::io::Error,
}

impl std::fmt::Debug for SendEmailError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        error_chain_fmt(self, f)
    }
}

/// Stand-in for a real mail provider: "sending" an email means writing a
/// single line describing it to the given output.
#[derive(Debug, Clone, Default)]
pub struct EmailClient;

impl EmailClient {
    pub fn new() -> Self {
        Self
    }

    #[tracing::instrument(name = "Send notification email", skip(self, out))]
    pub fn send_email<W: Write + ?Sized>(
        &self,
        out: &mut W,
        recipient: &CustomerEmail,
        name: &CustomerName,
    ) -> Result<(), SendEmailError> {
        writeln!(out, "Sending to {} for {}", recipient.as_ref(), name.as_ref()).map_err(|e| {
            tracing::error!("Failed to write notification: {:?}", e);
            SendEmailError {
                recipient: recipient.as_ref().to_owned(),
                source: e,
            }
        })?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use claim::{assert_err, assert_ok};
    use fake::faker::internet::en::SafeEmail;
    use fake::faker::name::en::Name;
    use fake::Fake;

    use crate::domain::{CustomerEmail, CustomerName};

    use super::EmailClient;

    struct BrokenPipe;

    impl Write for BrokenPipe {
        fn write(&mut self, _buf: &[u8]) -> std::io::Result<usize> {
            Err(std::io::Error::new(
                std::io::ErrorKind::BrokenPipe,
                "reader went away",
            ))
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    fn email() -> CustomerEmail {
        CustomerEmail::parse(SafeEmail().fake())
    }

    fn name() -> CustomerName {
        CustomerName::parse(Name().fake())
    }

    #[test]
    fn send_email_writes_a_single_line() {
        let recipient = email();
        let name = name();
        let mut out = Vec::new();

        let outcome = EmailClient::new().send_email(&mut out, &recipient, &name);

        assert_ok!(outcome);
        let written = String::from_utf8(out).unwrap();
        assert_eq!(
            written,
            format!("Sending to {} for {}\n", recipient.as_ref(), name.as_ref())
        );
    }

    #[test]
    fn send_email_fails_if_the_output_is_closed() {
        let outcome = EmailClient::new().send_email(&mut BrokenPipe, &email(), &name());

        assert_err!(&outcome);
        let error = outcome.unwrap_err();
        assert!(format!("{:?}", error).contains("reader went away"));
    }
}
