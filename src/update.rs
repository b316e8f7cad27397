//! Update functions for pencil sessions
//!
//! All session state transformations flow through these functions.

use crate::error::PencilError;
use crate::messages::PencilMsg;
use crate::session::{Failure, Session};

/// Apply one action to a session
///
/// # Errors
///
/// Propagates the [`PencilError`] of a failed erase or edit. The session is
/// unchanged when an error is returned.
pub fn update(session: &mut Session, msg: PencilMsg) -> Result<(), PencilError> {
    let Session { pencil, page } = session;

    match msg {
        PencilMsg::Write(text) => pencil.write(page, &text),
        PencilMsg::Erase(span) => {
            pencil.erase(page, &span)?;
        }
        PencilMsg::Edit { index, text } => pencil.edit(page, &text, index)?,
        PencilMsg::Sharpen => {
            pencil.sharpen();
        }
    }

    Ok(())
}

/// Apply a sequence of actions in order
///
/// With `keep_going`, failed actions are logged, collected and skipped.
/// Without it, the first failure stops the run; actions already applied
/// stay applied.
///
/// # Errors
///
/// Returns the first failure when `keep_going` is `false`.
pub fn run<I>(session: &mut Session, msgs: I, keep_going: bool) -> Result<Vec<Failure>, Failure>
where
    I: IntoIterator<Item = PencilMsg>,
{
    let mut failures = Vec::new();

    for (step, msg) in msgs.into_iter().enumerate() {
        let action = msg.to_string();
        tracing::debug!(step, kind = msg.name(), "applying {}", action);

        if let Err(e) = update(session, msg) {
            let failure = Failure {
                step,
                action,
                error: e.to_string(),
            };
            if !keep_going {
                return Err(failure);
            }
            tracing::warn!(step, "skipping {}: {}", failure.action, failure.error);
            failures.push(failure);
        }
    }

    Ok(failures)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PencilConfig;

    fn config(point: u32, eraser: u32) -> PencilConfig {
        PencilConfig {
            point_durability: Some(point),
            length: None,
            eraser_durability: Some(eraser),
        }
    }

    #[test]
    fn test_update_write() {
        let mut session = Session::new(config(50, 10));
        update(&mut session, PencilMsg::Write("hello".into())).unwrap();
        assert_eq!(session.text(), "hello");
        assert_eq!(session.pencil.point_durability(), 45);
    }

    #[test]
    fn test_update_erase_then_edit() {
        let mut session = Session::with_text(config(50, 10), "An apple a day");
        update(&mut session, PencilMsg::Erase("apple".into())).unwrap();
        assert_eq!(session.text(), "An       a day");
        assert!(session.page.has_edit_index(3));

        update(
            &mut session,
            PencilMsg::Edit {
                index: 3,
                text: "onion".into(),
            },
        )
        .unwrap();
        assert_eq!(session.text(), "An onion a day");
        assert_eq!(session.page.edit_indexes().count(), 0);
    }

    #[test]
    fn test_update_sharpen() {
        let mut session = Session::new(config(5, 10));
        update(&mut session, PencilMsg::Write("abc".into())).unwrap();
        update(&mut session, PencilMsg::Sharpen).unwrap();
        assert_eq!(session.pencil.point_durability(), 5);
        assert_eq!(session.pencil.length(), 9);
    }

    #[test]
    fn test_update_edit_without_erase() {
        let mut session = Session::with_text(config(50, 10), "An       a day");
        let err = update(
            &mut session,
            PencilMsg::Edit {
                index: 3,
                text: "onion".into(),
            },
        )
        .unwrap_err();
        assert_eq!(err, PencilError::EditWithoutErase { index: 3 });
        assert_eq!(session.text(), "An       a day");
    }

    #[test]
    fn test_run_stops_at_first_failure() {
        let mut session = Session::new(config(50, 10));
        let msgs = vec![
            PencilMsg::Write("one two".into()),
            PencilMsg::Erase("three".into()),
            PencilMsg::Write(" four".into()),
        ];
        let failure = run(&mut session, msgs, false).unwrap_err();
        assert_eq!(failure.step, 1);
        assert_eq!(failure.action, "erase \"three\"");
        assert_eq!(session.text(), "one two");
    }

    #[test]
    fn test_run_keep_going_collects_failures() {
        let mut session = Session::new(config(50, 10));
        let msgs = vec![
            PencilMsg::Write("one two".into()),
            PencilMsg::Erase("three".into()),
            PencilMsg::Write(" four".into()),
        ];
        let failures = run(&mut session, msgs, true).unwrap();
        assert_eq!(failures.len(), 1);
        assert_eq!(failures[0].step, 1);
        assert_eq!(session.text(), "one two four");
    }
}
