use clap::Subcommand;
use mxchange_exchange::{EndExchangeForm, StartExchangeForm};
use serde::Serialize;

#[derive(Subcommand)]
pub enum Form {
    /// Validate a "start exchange" submission
    Start {
        #[arg(long, default_value = "")]
        guest: String,
        /// Calendar date, YYYY-MM-DD
        #[arg(long, default_value = "")]
        date: String,
        /// One of breakfast, lunch, dinner
        #[arg(long, default_value = "")]
        meal: String,
    },
    /// Validate an "end exchange" submission
    End {
        #[arg(long, default_value = "")]
        date: String,
    },
}

pub fn check(form: Form) -> anyhow::Result<()> {
    match form {
        Form::Start { guest, date, meal } => print(mxchange_exchange::validate_start(
            &StartExchangeForm { guest, date, meal },
        )),
        Form::End { date } => print(mxchange_exchange::validate_end(&EndExchangeForm { date })),
    }
}

fn print<T: Serialize>(result: mxchange_shared::Result<T>) -> anyhow::Result<()> {
    let err = match result {
        Ok(request) => {
            println!("{}", serde_json::to_string_pretty(&request)?);
            return Ok(());
        }
        Err(err) => err,
    };

    let Some(fields) = err.field_errors() else {
        return Err(err.into());
    };

    for error in fields.iter() {
        tracing::error!(field = %error.field, "{}", error.message);
    }

    anyhow::bail!("submission rejected on {} field(s)", fields.len())
}
