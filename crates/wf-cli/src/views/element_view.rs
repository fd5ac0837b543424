//! Lines and faces views
//!
//! Both views share one set of handlers, parameterized by [`ElementKind`].

use std::fmt::Display;
use std::io::{BufRead, Write};

use wf_core::{
    Controller, ControllerResult, Coords3, ElementRecord, ElementStatus, Face3, Line3, Point3,
};

use super::args::{parse_index, parse_points};
use super::{Flow, Handler, Session, run_loop};
use crate::command::CommandRegistry;
use crate::error::CliError;
use crate::palette;

/// Element type edited by a view
pub trait ElementKind {
    /// Singular name used in messages
    const NAME: &'static str;
    const PROMPT: &'static str;
    const ADD_USAGE: &'static str;

    type Element: Display;

    fn records(controller: &Controller) -> Vec<ElementRecord<Self::Element>>;
    fn points(controller: &Controller, index: usize) -> ControllerResult<Vec<Point3>>;
    fn add(controller: &mut Controller, points: &[Coords3]) -> Result<(), CliError>;
    fn modify(
        controller: &mut Controller,
        index: usize,
        point_index: usize,
        coords: Coords3,
    ) -> ControllerResult<()>;
    fn remove(controller: &mut Controller, index: usize) -> ControllerResult<Self::Element>;
    /// Named measurements shown by `show`
    fn measures(element: &Self::Element) -> Vec<(&'static str, f64)>;
}

pub struct LineKind;

impl ElementKind for LineKind {
    const NAME: &'static str = "line";
    const PROMPT: &'static str = "lines> ";
    const ADD_USAGE: &'static str = "<x1> <y1> <z1> <x2> <y2> <z2>";

    type Element = Line3;

    fn records(controller: &Controller) -> Vec<ElementRecord<Line3>> {
        controller.lines()
    }

    fn points(controller: &Controller, index: usize) -> ControllerResult<Vec<Point3>> {
        controller.line_points(index).map(Vec::from)
    }

    fn add(controller: &mut Controller, points: &[Coords3]) -> Result<(), CliError> {
        let &[start, end] = points else {
            return Err(CliError::Usage);
        };
        Ok(controller.add_line(start, end)?)
    }

    fn modify(
        controller: &mut Controller,
        index: usize,
        point_index: usize,
        coords: Coords3,
    ) -> ControllerResult<()> {
        controller.modify_line(index, point_index, coords)
    }

    fn remove(controller: &mut Controller, index: usize) -> ControllerResult<Line3> {
        controller.remove_line(index)
    }

    fn measures(line: &Line3) -> Vec<(&'static str, f64)> {
        vec![("length", line.length())]
    }
}

pub struct FaceKind;

impl ElementKind for FaceKind {
    const NAME: &'static str = "face";
    const PROMPT: &'static str = "faces> ";
    const ADD_USAGE: &'static str = "<x1> <y1> <z1> <x2> <y2> <z2> <x3> <y3> <z3>";

    type Element = Face3;

    fn records(controller: &Controller) -> Vec<ElementRecord<Face3>> {
        controller.faces()
    }

    fn points(controller: &Controller, index: usize) -> ControllerResult<Vec<Point3>> {
        controller.face_points(index).map(Vec::from)
    }

    fn add(controller: &mut Controller, points: &[Coords3]) -> Result<(), CliError> {
        let &[a, b, c] = points else {
            return Err(CliError::Usage);
        };
        Ok(controller.add_face(a, b, c)?)
    }

    fn modify(
        controller: &mut Controller,
        index: usize,
        point_index: usize,
        coords: Coords3,
    ) -> ControllerResult<()> {
        controller.modify_face(index, point_index, coords)
    }

    fn remove(controller: &mut Controller, index: usize) -> ControllerResult<Face3> {
        controller.remove_face(index)
    }

    fn measures(face: &Face3) -> Vec<(&'static str, f64)> {
        vec![("perimeter", face.length()), ("area", face.area())]
    }
}

/// Run the command loop of the view for `K` until `back` or end of input
pub fn run_element_view<K: ElementKind, R: BufRead, W: Write>(
    session: &mut Session<R, W>,
) -> Result<(), CliError> {
    tracing::debug!("Entering {} view", K::NAME);
    run_loop(session, K::PROMPT, &registry::<K, R, W>())
}

fn registry<K: ElementKind, R: BufRead, W: Write>() -> CommandRegistry<Handler<R, W>> {
    let mut registry = CommandRegistry::new();
    registry
        .register("list", "", "List all elements.", list::<K, R, W> as Handler<R, W>)
        .register("show", "<index>", "Show points and measurements.", show::<K, R, W>)
        .register("add", K::ADD_USAGE, "Add a new element.", add::<K, R, W>)
        .register(
            "modify",
            "<index> <point> <x> <y> <z>",
            "Move one point of an element.",
            modify::<K, R, W>,
        )
        .register("remove", "<index>", "Remove an element.", remove::<K, R, W>)
        .register("back", "", "Return to the main view.", back);
    registry
}

fn status_color(status: ElementStatus) -> &'static str {
    match status {
        ElementStatus::Untouched => palette::FG_GRAY,
        ElementStatus::Created => palette::FG_GREEN,
        ElementStatus::Modified => palette::FG_YELLOW,
    }
}

fn list<K: ElementKind, R: BufRead, W: Write>(
    session: &mut Session<R, W>,
    args: &[&str],
) -> Result<Flow, CliError> {
    if !args.is_empty() {
        return Err(CliError::Usage);
    }
    let records = K::records(&session.controller);
    let console = &mut session.console;
    if records.is_empty() {
        console.hint(format!("(no {}s)", K::NAME))?;
        return Ok(Flow::Continue);
    }

    let colors = console.palette();
    for (index, record) in records.iter().enumerate() {
        console.println(format!(
            "{} {} {}",
            colors.paint(palette::FG_PURPLE, format!("#{index}")),
            record.element,
            colors.paint(status_color(record.status), record.status.display_name()),
        ))?;
    }
    Ok(Flow::Continue)
}

fn show<K: ElementKind, R: BufRead, W: Write>(
    session: &mut Session<R, W>,
    args: &[&str],
) -> Result<Flow, CliError> {
    let &[index] = args else {
        return Err(CliError::Usage);
    };
    let index = parse_index(index)?;
    let points = K::points(&session.controller, index)?;
    let record = K::records(&session.controller).into_iter().nth(index);

    let console = &mut session.console;
    let colors = console.palette();
    console.println_colored(palette::FG_PURPLE, format!("{} #{index}:", K::NAME))?;
    for (point_index, point) in points.iter().enumerate() {
        console.println(format!("  point {point_index}:\t{point}"))?;
    }
    if let Some(record) = record {
        for (name, value) in K::measures(&record.element) {
            console.println(format!("  {name}:\t{value}"))?;
        }
        console.println(format!(
            "  status:\t{}",
            colors.paint(status_color(record.status), record.status.display_name())
        ))?;
    }
    Ok(Flow::Continue)
}

fn add<K: ElementKind, R: BufRead, W: Write>(
    session: &mut Session<R, W>,
    args: &[&str],
) -> Result<Flow, CliError> {
    let points = parse_points(args)?;
    K::add(&mut session.controller, &points)?;
    let index = K::records(&session.controller).len().saturating_sub(1);
    session.console.success(format!("Added {} #{index}.", K::NAME))?;
    Ok(Flow::Continue)
}

fn modify<K: ElementKind, R: BufRead, W: Write>(
    session: &mut Session<R, W>,
    args: &[&str],
) -> Result<Flow, CliError> {
    let &[index, point_index, ref coords @ ..] = args else {
        return Err(CliError::Usage);
    };
    let index = parse_index(index)?;
    let point_index = parse_index(point_index)?;
    let &[coords] = parse_points(coords)?.as_slice() else {
        return Err(CliError::Usage);
    };

    K::modify(&mut session.controller, index, point_index, coords)?;
    session
        .console
        .success(format!("Modified point {point_index} of {} #{index}.", K::NAME))?;
    Ok(Flow::Continue)
}

fn remove<K: ElementKind, R: BufRead, W: Write>(
    session: &mut Session<R, W>,
    args: &[&str],
) -> Result<Flow, CliError> {
    let &[index] = args else {
        return Err(CliError::Usage);
    };
    let index = parse_index(index)?;
    let removed = K::remove(&mut session.controller, index)?;
    session
        .console
        .success(format!("Removed {} #{index} {removed}.", K::NAME))?;
    Ok(Flow::Continue)
}

fn back<R: BufRead, W: Write>(_: &mut Session<R, W>, args: &[&str]) -> Result<Flow, CliError> {
    if args.is_empty() {
        Ok(Flow::Leave)
    } else {
        Err(CliError::Usage)
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::*;
    use super::*;

    fn loaded(input: &str) -> Session<&[u8], Vec<u8>> {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("corner.wf");
        std::fs::write(&path, CORNER).unwrap();
        let mut session = session(input);
        session.controller.load_model(&path).unwrap();
        session
    }

    #[test]
    fn test_list_lines() {
        let mut session = loaded("list\nback\n");
        run_element_view::<LineKind, _, _>(&mut session).unwrap();
        let out = output(&session);
        assert!(out.contains("#0 [(0, 0, 0), (1, 0, 0)] untouched\n"));
        assert!(out.contains("#2 [(0, 0, 0), (0, 0, 1)] untouched\n"));
    }

    #[test]
    fn test_show_face() {
        let mut session = loaded("show 0\nshow 4\nshow x\n");
        run_element_view::<FaceKind, _, _>(&mut session).unwrap();
        let out = output(&session);
        assert!(out.contains("face #0:\n"));
        assert!(out.contains("  point 2:\t(0, 0, 1)\n"));
        assert!(out.contains("  area:\t"));
        assert!(out.contains("  status:\tuntouched\n"));
        assert!(out.contains("error: element index 4 out of range"));
        assert!(out.contains("error: 'x' is not a valid index"));
    }

    #[test]
    fn test_add_modify_remove_lines() {
        let script = "\
add 1 1 1 2 2 2
add 2 2 2 1 1 1
add 1 2 3
modify 3 0 5 5 5
modify 3 2 5 5 5
modify 3 0 5 5
remove 0
list
";
        let mut session = loaded(script);
        run_element_view::<LineKind, _, _>(&mut session).unwrap();
        let out = output(&session);

        assert!(out.contains("Added line #3.\n"));
        assert!(out.contains("error: an identical element already exists"));
        assert!(out.contains(&format!("error: usage: add {}", LineKind::ADD_USAGE)));
        assert!(out.contains("Modified point 0 of line #3.\n"));
        assert!(out.contains("error: point index 2 out of range"));
        assert!(out.contains("error: usage: modify <index> <point> <x> <y> <z>"));
        assert!(out.contains("Removed line #0 [(0, 0, 0), (1, 0, 0)].\n"));
        assert!(out.contains("#2 [(5, 5, 5), (2, 2, 2)] created\n"));

        assert_eq!(session.controller.lines().len(), 3);
    }

    #[test]
    fn test_add_face_with_collapsed_points() {
        let mut session = loaded("add 0 0 0 0 0 0 1 1 1\nadd 1 0 0 0 1 0 1 1 0\nlist\n");
        run_element_view::<FaceKind, _, _>(&mut session).unwrap();
        let out = output(&session);
        assert!(out.contains("error: points of the element coincide"));
        assert!(out.contains("#1 [(1, 0, 0), (0, 1, 0), (1, 1, 0)] created\n"));
    }

    #[test]
    fn test_empty_list() {
        let mut session = session("list\n");
        run_element_view::<FaceKind, _, _>(&mut session).unwrap();
        assert!(output(&session).contains("(no faces)\n"));
    }
}
