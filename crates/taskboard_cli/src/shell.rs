//! Interactive task shell.
//!
//! # Responsibility
//! - Drive the task access boundary from line commands.
//! - Own presentation concerns: rendering, delete confirmation and
//!   change reporting.
//!
//! # Invariants
//! - The shell only talks to tasks through `TaskAccess`.
//! - Declined confirmations never call `delete_task`.

use crate::command::{parse_command, Command, HELP_TEXT};
use std::cell::Cell;
use std::io::{self, BufRead, Write};
use std::rc::Rc;
use taskboard_core::{Task, TaskAccess, TaskFilter, TaskInput, TaskPatch, TaskSnapshot, TaskTitle};

/// Presentation-owned confirmation step before deleting a task.
pub trait DeleteConfirmation {
    fn confirm_delete(&mut self, task: &Task) -> io::Result<bool>;
}

/// Line-oriented console over any reader/writer pair.
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Reads one line without its terminator. Returns `None` at end of input.
    pub fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    pub fn output(&mut self) -> &mut W {
        &mut self.output
    }
}

impl<R: BufRead, W: Write> DeleteConfirmation for Console<R, W> {
    fn confirm_delete(&mut self, task: &Task) -> io::Result<bool> {
        write!(self.output, "Delete task \"{}\"? [y/N] ", task.title)?;
        self.output.flush()?;
        let answer = self.read_line()?.unwrap_or_default();
        Ok(matches!(
            answer.trim().to_ascii_lowercase().as_str(),
            "y" | "yes"
        ))
    }
}

/// Interactive shell bound to one task access handle.
pub struct Shell<A, R, W> {
    access: A,
    console: Console<R, W>,
    changed: Rc<Cell<Option<usize>>>,
}

impl<A: TaskAccess, R: BufRead, W: Write> Shell<A, R, W> {
    /// Creates a shell and subscribes it to task changes.
    pub fn new(mut access: A, input: R, output: W) -> Self {
        let changed = Rc::new(Cell::new(None));
        let sink = Rc::clone(&changed);
        access.subscribe(Box::new(move |snapshot: &TaskSnapshot| {
            sink.set(Some(snapshot.len()));
        }));

        Self {
            access,
            console: Console::new(input, output),
            changed,
        }
    }

    /// Processes commands until `quit` or end of input.
    pub fn run(&mut self) -> io::Result<()> {
        while let Some(line) = self.console.read_line()? {
            let command = match parse_command(&line) {
                Ok(Some(command)) => command,
                Ok(None) => continue,
                Err(err) => {
                    writeln!(self.console.output(), "error: {err}")?;
                    continue;
                }
            };
            if command == Command::Quit {
                break;
            }
            self.execute(command)?;
            self.report_change()?;
        }
        self.console.output().flush()
    }

    #[cfg(test)]
    fn into_access(self) -> A {
        self.access
    }

    fn execute(&mut self, command: Command) -> io::Result<()> {
        match command {
            Command::Add {
                priority,
                title,
                description,
            } => {
                let mut input = TaskInput::new(title).with_priority(priority);
                input.description = description;
                if let Err(err) = self.access.add_task(input) {
                    writeln!(self.console.output(), "error: {err}")?;
                }
            }
            Command::List(filter) => self.render(&filter)?,
            Command::Cycle(position) => {
                if let Some(task) = self.task_at(position)? {
                    if let Some(status) = self.access.cycle_status(task.id) {
                        writeln!(self.console.output(), "{position}: now {status}")?;
                    }
                }
            }
            Command::SetStatus(position, status) => {
                self.patch(position, TaskPatch::new().status(status))?;
            }
            Command::SetPriority(position, priority) => {
                self.patch(position, TaskPatch::new().priority(priority))?;
            }
            Command::Rename(position, title) => match TaskTitle::parse(&title) {
                Ok(title) => self.patch(position, TaskPatch::new().title(title))?,
                Err(err) => writeln!(self.console.output(), "error: {err}")?,
            },
            Command::Describe(position, text) => {
                self.patch(position, TaskPatch::new().description(text))?;
            }
            Command::Delete(position) => {
                if let Some(task) = self.task_at(position)? {
                    if self.console.confirm_delete(&task)? {
                        self.access.delete_task(task.id);
                    } else {
                        writeln!(self.console.output(), "kept")?;
                    }
                }
            }
            Command::Help => writeln!(self.console.output(), "{HELP_TEXT}")?,
            Command::Quit => {}
        }
        Ok(())
    }

    fn patch(&mut self, position: usize, patch: TaskPatch) -> io::Result<()> {
        if let Some(task) = self.task_at(position)? {
            self.access.update_task(task.id, patch);
        }
        Ok(())
    }

    fn task_at(&mut self, position: usize) -> io::Result<Option<Task>> {
        let task = self
            .access
            .list_tasks()
            .into_tasks()
            .into_iter()
            .nth(position - 1);
        if task.is_none() {
            writeln!(self.console.output(), "error: no task number {position}")?;
        }
        Ok(task)
    }

    fn render(&mut self, filter: &TaskFilter) -> io::Result<()> {
        let snapshot = self.access.list_tasks();
        let out = self.console.output();
        let mut shown = 0;
        for (index, task) in snapshot.iter().enumerate() {
            if !filter.matches(task) {
                continue;
            }
            shown += 1;
            writeln!(
                out,
                "{}. [{}] ({}) {}",
                index + 1,
                task.status,
                task.priority,
                task.title
            )?;
            if let Some(description) = &task.description {
                writeln!(out, "     {description}")?;
            }
        }
        if shown == 0 {
            writeln!(out, "No tasks found.")?;
        }
        Ok(())
    }

    fn report_change(&mut self) -> io::Result<()> {
        if let Some(count) = self.changed.take() {
            writeln!(self.console.output(), "({count} tasks)")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::Shell;
    use std::io::Cursor;
    use taskboard_core::{TaskAccess, TaskPriority, TaskService, TaskStatus};

    fn run(script: &str) -> (String, TaskService) {
        let mut output = Vec::new();
        let service = {
            let mut shell = Shell::new(TaskService::new(), Cursor::new(script), &mut output);
            shell.run().expect("in-memory io should not fail");
            shell.into_access()
        };
        (
            String::from_utf8(output).expect("shell writes utf-8"),
            service,
        )
    }

    #[test]
    fn add_and_list_render_tasks_in_order() {
        let (output, service) = run("add high Write report | quarterly\nadd Buy milk\nlist\n");

        assert_eq!(service.list_tasks().len(), 2);
        assert!(output.contains("1. [todo] (high) Write report\n     quarterly\n"));
        assert!(output.contains("2. [todo] (medium) Buy milk\n"));
        assert!(output.contains("(2 tasks)"));
    }

    #[test]
    fn invalid_title_reports_error_and_keeps_store() {
        let long = "x".repeat(101);
        let (output, service) = run(&format!("add {long}\nadd   \n"));

        assert!(service.list_tasks().is_empty());
        assert!(output.contains("at most 100 allowed"));
        assert!(output.contains("task title must not be empty"));
        assert!(!output.contains("tasks)"));
    }

    #[test]
    fn filtered_list_keeps_full_list_numbers() {
        let (output, _) =
            run("add a\nadd b\nstatus 2 done\nlist status=done\nlist priority=high\n");

        assert!(output.contains("2. [done] (medium) b\n"));
        assert!(!output.contains("1. [todo] (medium) a\n"));
        assert!(output.contains("No tasks found."));
    }

    #[test]
    fn cycle_and_patch_commands_update_tasks() {
        let (output, service) =
            run("add a\ncycle 1\npriority 1 low\nrename 1 renamed\ndescribe 1 notes\n");

        let task = service.list_tasks().into_tasks().remove(0);
        assert!(output.contains("1: now in-progress"));
        assert_eq!(task.status, TaskStatus::InProgress);
        assert_eq!(task.priority, TaskPriority::Low);
        assert_eq!(task.title.as_str(), "renamed");
        assert_eq!(task.description.as_deref(), Some("notes"));
    }

    #[test]
    fn delete_requires_confirmation() {
        let (output, service) = run("add a\nadd b\ndelete 1\nno\ndelete 2\ny\nlist\n");

        assert!(output.contains("Delete task \"a\"? [y/N] kept"));
        assert!(output.contains("Delete task \"b\"? [y/N] "));
        let titles = service
            .list_tasks()
            .iter()
            .map(|task| task.title.to_string())
            .collect::<Vec<_>>();
        assert_eq!(titles, vec!["a".to_string()]);
    }

    #[test]
    fn unknown_position_is_reported() {
        let (output, _) = run("cycle 3\n");
        assert!(output.contains("error: no task number 3"));
    }

    #[test]
    fn quit_stops_processing() {
        let (_, service) = run("add a\nquit\nadd b\n");
        assert_eq!(service.list_tasks().len(), 1);
    }
}
