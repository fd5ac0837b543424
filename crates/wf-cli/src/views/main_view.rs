//! Top-level view: load, statistics, save and the element views

use std::io::{BufRead, Write};
use std::path::PathBuf;

use super::element_view::{FaceKind, LineKind, run_element_view};
use super::{Flow, Handler, Session, run_loop};
use crate::command::CommandRegistry;
use crate::error::CliError;
use crate::palette;

const PROMPT: &str = "#> ";

/// Load the model at `path` (asking for it when `None`) and run the main loop.
///
/// Returns without entering the loop when input ends before a path is given.
pub fn run_main_view<R: BufRead, W: Write>(
    session: &mut Session<R, W>,
    path: Option<PathBuf>,
) -> Result<(), CliError> {
    let path = match path {
        Some(path) => path,
        None => match session.console.ask("Enter model path: ")? {
            Some(answer) => PathBuf::from(answer),
            None => return Ok(()),
        },
    };

    session.controller.load_model(&path)?;
    let name = session.controller.name().to_string();
    session
        .console
        .success(format!("Successfully loaded model '{name}'."))?;

    run_loop(session, PROMPT, &registry())
}

fn registry<R: BufRead, W: Write>() -> CommandRegistry<Handler<R, W>> {
    let mut registry = CommandRegistry::new();
    registry
        .register("stat", "", "Display model statistics.", stat as Handler<R, W>)
        .register("save", "[path]", "Save the model.", save)
        .register("lines", "", "Enter the lines view.", lines)
        .register("faces", "", "Enter the faces view.", faces)
        .register("exit", "", "Quit.", exit);
    registry
}

fn no_args(args: &[&str]) -> Result<(), CliError> {
    if args.is_empty() {
        Ok(())
    } else {
        Err(CliError::Usage)
    }
}

fn stat<R: BufRead, W: Write>(
    session: &mut Session<R, W>,
    args: &[&str],
) -> Result<Flow, CliError> {
    no_args(args)?;
    let stats = session.controller.statistics();
    let rows: [(&str, String); 6] = [
        ("Total Point Count", stats.total_point_count.to_string()),
        ("Total Line Count", stats.total_line_count.to_string()),
        ("Total Line Length", stats.total_line_length.to_string()),
        ("Total Face Count", stats.total_face_count.to_string()),
        ("Total Face Area", stats.total_face_area.to_string()),
        ("Bounding Box Volume", stats.bounding_box_volume.to_string()),
    ];

    let console = &mut session.console;
    let colors = console.palette();
    console.println_colored(palette::FG_PURPLE, "Statistics:")?;
    for (label, value) in rows {
        console.println(format!(
            "{}\t{value}",
            colors.paint(palette::FG_PURPLE, format!("  {label}:"))
        ))?;
    }
    Ok(Flow::Continue)
}

fn save<R: BufRead, W: Write>(
    session: &mut Session<R, W>,
    args: &[&str],
) -> Result<Flow, CliError> {
    let target = match args {
        [path] => path.to_string(),
        [] => {
            session
                .console
                .hint("(Enter nothing to use original file name)")?;
            match session.console.ask("Save to: ")? {
                Some(answer) => answer,
                None => return Ok(Flow::Leave),
            }
        }
        _ => return Err(CliError::Usage),
    };

    session.controller.save_model(&target)?;
    let name = session.controller.name().to_string();
    session
        .console
        .success(format!("Successfully saved model '{name}'."))?;
    Ok(Flow::Continue)
}

fn lines<R: BufRead, W: Write>(
    session: &mut Session<R, W>,
    args: &[&str],
) -> Result<Flow, CliError> {
    no_args(args)?;
    run_element_view::<LineKind, R, W>(session)?;
    Ok(Flow::Continue)
}

fn faces<R: BufRead, W: Write>(
    session: &mut Session<R, W>,
    args: &[&str],
) -> Result<Flow, CliError> {
    no_args(args)?;
    run_element_view::<FaceKind, R, W>(session)?;
    Ok(Flow::Continue)
}

fn exit<R: BufRead, W: Write>(_: &mut Session<R, W>, args: &[&str]) -> Result<Flow, CliError> {
    no_args(args)?;
    Ok(Flow::Leave)
}

#[cfg(test)]
mod tests {
    use super::super::test_support::*;
    use super::*;
    use std::fs;
    use tempfile::tempdir;
    use wf_core::ControllerError;

    #[test]
    fn test_load_and_stat() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("corner.wf");
        fs::write(&path, CORNER).unwrap();

        let mut session = session("stat\nexit\nstat\n");
        run_main_view(&mut session, Some(path)).unwrap();
        let out = output(&session);

        assert!(out.starts_with("Successfully loaded model 'corner'.\n#> Statistics:\n"));
        assert!(out.contains("  Total Point Count:\t4\n"));
        assert!(out.contains("  Total Line Length:\t3\n"));
        assert!(out.contains("  Total Face Count:\t1\n"));
        assert!(out.contains("  Bounding Box Volume:\t1\n"));
        assert_eq!(out.matches("Statistics:").count(), 1);
    }

    #[test]
    fn test_asks_for_path() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("corner.wf");
        fs::write(&path, CORNER).unwrap();

        let input = format!("{}\nexit\n", path.display());
        let mut session = session(&input);
        run_main_view(&mut session, None).unwrap();
        assert!(output(&session).starts_with("Enter model path: Successfully loaded"));
    }

    #[test]
    fn test_load_failure() {
        let dir = tempdir().unwrap();
        let mut session = session("stat\n");
        let result = run_main_view(&mut session, Some(dir.path().join("missing.wf")));
        assert!(matches!(
            result,
            Err(CliError::Controller(ControllerError::FileOpen(_)))
        ));
        assert!(!output(&session).contains("Statistics:"));
    }

    #[test]
    fn test_edit_then_save_in_place() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("corner.wf");
        fs::write(&path, CORNER).unwrap();

        let script = "lines\nremove 0\nback\nsave\n\nexit\n";
        let mut session = session(script);
        run_main_view(&mut session, Some(path.clone())).unwrap();
        let out = output(&session);
        assert!(out.contains("(Enter nothing to use original file name)\nSave to: "));
        assert!(out.contains("Successfully saved model 'corner'.\n"));

        let saved = fs::read_to_string(&path).unwrap();
        assert_eq!(saved.lines().filter(|l| l.starts_with("l ")).count(), 2);
        assert_eq!(saved.lines().filter(|l| l.starts_with("f ")).count(), 1);
    }

    #[test]
    fn test_save_as_ron() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("corner.wf");
        fs::write(&path, CORNER).unwrap();
        let copy = dir.path().join("copy.ron");

        let script = format!("save {}\nexit\n", copy.display());
        let mut session = session(&script);
        run_main_view(&mut session, Some(path)).unwrap();

        assert!(output(&session).contains("Successfully saved model 'corner'."));
        assert_eq!(session.controller.path(), Some(copy.as_path()));
        assert!(fs::read_to_string(&copy).unwrap().contains("corner"));
    }

    #[test]
    fn test_unknown_command_in_main_view() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("corner.wf");
        fs::write(&path, CORNER).unwrap();

        let mut session = session("frobnicate\nstat extra\nhelp\n");
        run_main_view(&mut session, Some(path)).unwrap();
        let out = output(&session);
        assert!(out.contains("error: unknown command 'frobnicate'"));
        assert!(out.contains("error: usage: stat\n"));
        assert!(out.contains("  save [path]  Save the model.\n"));
    }
}
