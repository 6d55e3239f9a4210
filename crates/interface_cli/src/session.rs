//! Interactive intake session
//!
//! `IntakeSession` asks for each field in turn, gives the user a fixed number
//! of attempts per field, and either assembles a `ValidatedRecord` or stops
//! at the first field whose attempts run out.
//!
//! The session is generic over its input, output and clock so it can be
//! driven from a terminal or from an in-memory script:
//!
//! ```rust
//! use std::io::Cursor;
//! use chrono::NaiveDate;
//! use core_kernel::FixedClock;
//! use interface_cli::{IntakeConfig, IntakeSession, SessionOutcome};
//!
//! let answers = "44/05/14\nm\nJan@Example.pl\nJan Kowalski\n+48 123 456 789\n44051401359\n";
//! let clock = FixedClock::new(NaiveDate::from_ymd_opt(2026, 10, 16).unwrap());
//! let mut output = Vec::new();
//!
//! let outcome = IntakeSession::new(Cursor::new(answers), &mut output, clock, &IntakeConfig::default())
//!     .run()
//!     .unwrap();
//!
//! match outcome {
//!     SessionOutcome::Completed(record) => assert_eq!(record.email().as_str(), "jan@example.pl"),
//!     SessionOutcome::Aborted { field, .. } => panic!("aborted on {field}"),
//! }
//! ```

use std::io::{BufRead, Write};

use core_kernel::{Clock, SessionId};
use domain_identity::{
    BirthdayValidator, EmailValidator, Field, FieldValidator, IdentityCodeValidator,
    NameValidator, PhoneValidator, RecordBuilder, SexValidator, ValidatedRecord,
};

use crate::config::{IntakeConfig, SummaryFormat};
use crate::error::SessionError;
use crate::summary::Summary;

/// How a session ended
#[derive(Debug, Clone)]
pub enum SessionOutcome {
    /// Every field was accepted
    Completed(ValidatedRecord),
    /// `field` was rejected `attempts` times in a row
    Aborted {
        field: Field,
        attempts: u32,
        collected: RecordBuilder,
    },
}

impl SessionOutcome {
    pub fn is_completed(&self) -> bool {
        matches!(self, SessionOutcome::Completed(_))
    }
}

/// Returns the prompt shown before reading `field`
pub fn prompt_text(field: Field) -> &'static str {
    match field {
        Field::Birthday => "Please enter your birthday (format: YY/MM/DD)",
        Field::Gender => "Please enter your gender (M/F)",
        Field::Email => "Please enter your email address",
        Field::Name => "Please enter your full name",
        Field::Phone => "Please enter your Polish phone number (format: +48 XXX XXX XXX)",
        Field::Pesel => "\nPlease enter your PESEL number (11 digits)",
    }
}

/// Normalizes a raw answer before validation
///
/// Answers are trimmed; email addresses are lowercased and the gender letter
/// is uppercased.
pub fn normalize(field: Field, raw: &str) -> String {
    let trimmed = raw.trim();
    match field {
        Field::Email => trimmed.to_lowercase(),
        Field::Gender => trimmed.to_uppercase(),
        _ => trimmed.to_string(),
    }
}

/// An interactive intake over a line-oriented console
pub struct IntakeSession<R, W, C> {
    id: SessionId,
    input: R,
    output: W,
    clock: C,
    max_attempts: u32,
    summary_format: SummaryFormat,
}

impl<R: BufRead, W: Write, C: Clock> IntakeSession<R, W, C> {
    /// Creates a session reading answers from `input` and writing prompts to `output`
    pub fn new(input: R, output: W, clock: C, config: &IntakeConfig) -> Self {
        Self {
            id: SessionId::new_v7(),
            input,
            output,
            clock,
            max_attempts: config.max_attempts.max(1),
            summary_format: config.summary_format,
        }
    }

    pub fn id(&self) -> SessionId {
        self.id
    }

    /// Runs the session to completion
    ///
    /// # Errors
    ///
    /// Returns `SessionError` if the console cannot be read or written.
    /// Rejected answers are not errors.
    pub fn run(mut self) -> Result<SessionOutcome, SessionError> {
        let span = tracing::info_span!("intake_session", session_id = %self.id);
        let _guard = span.enter();

        self.welcome()?;
        let today = self.clock.today();
        let collected = RecordBuilder::new();

        let Some(birth_date) = self.collect(&BirthdayValidator::new(today))? else {
            return self.abort(Field::Birthday, collected);
        };
        let collected = collected.birth_date(birth_date);

        let Some(sex) = self.collect(&SexValidator)? else {
            return self.abort(Field::Gender, collected);
        };
        let collected = collected.sex(sex);

        let Some(email) = self.collect(&EmailValidator)? else {
            return self.abort(Field::Email, collected);
        };
        let collected = collected.email(email);

        let Some(name) = self.collect(&NameValidator)? else {
            return self.abort(Field::Name, collected);
        };
        let collected = collected.name(name);

        let Some(phone) = self.collect(&PhoneValidator)? else {
            return self.abort(Field::Phone, collected);
        };
        let collected = collected.phone(phone);

        let Some(code) = self.collect(&IdentityCodeValidator::new(birth_date, sex))? else {
            return self.abort(Field::Pesel, collected);
        };
        let record = collected.identity_code(code).build()?;

        self.complete(record)
    }

    fn welcome(&mut self) -> Result<(), SessionError> {
        writeln!(self.output, "Welcome to User Information Collection System")?;
        writeln!(
            self.output,
            "You have {} attempts for each field.\n",
            self.max_attempts
        )?;
        Ok(())
    }

    /// Prompts for one field until it is accepted or the attempts run out
    ///
    /// Returns `None` when every attempt was rejected.
    fn collect<V: FieldValidator>(&mut self, validator: &V) -> Result<Option<V::Output>, SessionError> {
        let field = validator.field();

        for attempt in 1..=self.max_attempts {
            write!(
                self.output,
                "{} [Attempt {}/{}]: ",
                prompt_text(field),
                attempt,
                self.max_attempts
            )?;
            self.output.flush()?;

            let answer = normalize(field, &self.read_answer()?);
            match validator.validate(&answer) {
                Ok(value) => {
                    tracing::debug!(%field, attempt, "field accepted");
                    return Ok(Some(value));
                }
                Err(error) => {
                    tracing::info!(%field, attempt, kind = error.kind(), "field rejected");
                    writeln!(self.output, "Error: {}", error)?;
                }
            }
        }

        Ok(None)
    }

    /// Reads one line of input
    ///
    /// End of input reads as an empty answer. Bytes that are not UTF-8 are
    /// replaced, so such a line fails validation like any other bad answer.
    fn read_answer(&mut self) -> Result<String, SessionError> {
        let mut line = Vec::new();
        if self.input.read_until(b'\n', &mut line)? == 0 {
            tracing::debug!("input closed");
            // The prompt line was never terminated
            writeln!(self.output)?;
        }
        Ok(String::from_utf8_lossy(&line).into_owned())
    }

    fn abort(mut self, field: Field, collected: RecordBuilder) -> Result<SessionOutcome, SessionError> {
        tracing::warn!(%field, attempts = self.max_attempts, "intake aborted");

        let summary = Summary::aborted(&collected, field).render(self.summary_format)?;
        writeln!(self.output, "\n{}", summary)?;
        writeln!(
            self.output,
            "\nValidation failed for {} after {} attempts.",
            field, self.max_attempts
        )?;
        writeln!(self.output, "Thank you for trying. Goodbye!")?;
        self.output.flush()?;

        Ok(SessionOutcome::Aborted {
            field,
            attempts: self.max_attempts,
            collected,
        })
    }

    fn complete(mut self, record: ValidatedRecord) -> Result<SessionOutcome, SessionError> {
        tracing::debug!("intake completed");

        let summary = Summary::completed(&record).render(self.summary_format)?;
        writeln!(
            self.output,
            "\n🎉 Congratulations! All information has been successfully validated! 🎉"
        )?;
        writeln!(self.output, "\n{}", summary)?;
        writeln!(
            self.output,
            "\nThank you for providing your information. Have a great day! 👋"
        )?;
        self.output.flush()?;

        Ok(SessionOutcome::Completed(record))
    }
}
