//! The numbered-menu loop.
//!
//! Input is read as whitespace-separated tokens, so several answers may sit
//! on one line. An unparsable token discards the rest of its line and the
//! prompt is repeated. Bytes that are not UTF-8 become U+FFFD, so they fail
//! to parse as numbers and are re-asked like any other bad token. End of
//! input ends the session.

use std::collections::VecDeque;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::str::FromStr;

use recgraph_core::{
    find_matching, flatten, load_from_path, save_to_path, sort, Error, FlatCollection, GraphStore,
    LengthRule, Record, MAX_NODES,
};
use tracing::debug;

use crate::render;

const MENU: &str = "\n=== Menu ===
1. Display Graph
2. Add Node to Graph
3. Add Edge to Graph
4. Transfer Graph to Array
5. Sort Array
6. Display Array
7. Process Array
8. Save Array to File
9. Load Array from File
10. Exit
Choose an option: ";

/// Whitespace tokenizer over line-buffered input.
struct Tokens<R> {
    input: R,
    pending: VecDeque<String>,
}

impl<R: BufRead> Tokens<R> {
    fn new(input: R) -> Self {
        Self {
            input,
            pending: VecDeque::new(),
        }
    }

    fn next_token(&mut self) -> io::Result<Option<String>> {
        loop {
            if let Some(token) = self.pending.pop_front() {
                return Ok(Some(token));
            }
            let mut line = Vec::new();
            if self.input.read_until(b'\n', &mut line)? == 0 {
                return Ok(None);
            }
            let line = String::from_utf8_lossy(&line);
            self.pending.extend(line.split_whitespace().map(str::to_owned));
        }
    }

    fn discard_line(&mut self) {
        self.pending.clear();
    }
}

enum Flow {
    Continue,
    Exit,
}

/// Interactive session owning the graph and the flat array.
pub struct Session<R, W> {
    tokens: Tokens<R>,
    out: W,
    graph: GraphStore,
    array: FlatCollection,
    data_file: PathBuf,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(input: R, out: W, graph: GraphStore, data_file: PathBuf) -> Self {
        Self {
            tokens: Tokens::new(input),
            out,
            graph,
            array: FlatCollection::new(),
            data_file,
        }
    }

    pub fn graph(&self) -> &GraphStore {
        &self.graph
    }

    pub fn array(&self) -> &FlatCollection {
        &self.array
    }

    /// Run until the user exits or input ends.
    pub fn run(&mut self) -> io::Result<()> {
        loop {
            self.out.write_all(MENU.as_bytes())?;
            self.out.flush()?;
            let Some(token) = self.tokens.next_token()? else {
                break;
            };
            let Ok(choice) = token.parse::<u32>() else {
                writeln!(self.out, "Invalid input")?;
                self.tokens.discard_line();
                continue;
            };
            debug!(choice, "menu choice");
            match self.dispatch(choice)? {
                Some(Flow::Continue) => {}
                Some(Flow::Exit) | None => break,
            }
        }
        writeln!(self.out, "Program terminated.")?;
        self.out.flush()
    }

    /// `None` means input ended inside a prompt.
    fn dispatch(&mut self, choice: u32) -> io::Result<Option<Flow>> {
        match choice {
            1 => render::graph(&mut self.out, &self.graph)?,
            2 => return self.add_node(),
            3 => return self.add_edge(),
            4 => self.transfer()?,
            5 => self.sort()?,
            6 => render::array(&mut self.out, &self.array)?,
            7 => self.process()?,
            8 => self.save()?,
            9 => self.load()?,
            10 => return Ok(Some(Flow::Exit)),
            _ => writeln!(self.out, "Invalid choice. Please try again.")?,
        }
        Ok(Some(Flow::Continue))
    }

    fn add_node(&mut self) -> io::Result<Option<Flow>> {
        if self.graph.is_full() {
            writeln!(self.out, "Graph is full")?;
            return Ok(Some(Flow::Continue));
        }
        let Some(a) = self.ask::<i32>("Enter a (int): ", "integer")? else {
            return Ok(None);
        };
        let Some(b) = self.ask::<String>("Enter b (string): ", "string")? else {
            return Ok(None);
        };
        let Some(c) = self.ask::<f64>("Enter c (double): ", "double")? else {
            return Ok(None);
        };
        let Some(d) = self.ask::<String>("Enter d (string): ", "string")? else {
            return Ok(None);
        };
        match self.graph.add_node(Record::new(a, &b, c, &d)) {
            Ok(index) => writeln!(self.out, "Node {index} added successfully")?,
            Err(e) => self.report(&e)?,
        }
        Ok(Some(Flow::Continue))
    }

    fn add_edge(&mut self) -> io::Result<Option<Flow>> {
        let count = self.graph.node_count();
        if count < 2 {
            writeln!(self.out, "Need at least 2 nodes to add an edge")?;
            return Ok(Some(Flow::Continue));
        }
        let last = count - 1;
        let prompt = format!("Enter source node index (0-{last}): ");
        let Some(from) = self.ask::<usize>(&prompt, "node index")? else {
            return Ok(None);
        };
        let prompt = format!("Enter destination node index (0-{last}): ");
        let Some(to) = self.ask::<usize>(&prompt, "node index")? else {
            return Ok(None);
        };
        match self.graph.add_edge(from, to) {
            Ok(()) => writeln!(self.out, "Edge added successfully")?,
            Err(e) => self.report(&e)?,
        }
        Ok(Some(Flow::Continue))
    }

    fn transfer(&mut self) -> io::Result<()> {
        match flatten(&self.graph) {
            Ok(array) => {
                self.array = array;
                writeln!(self.out, "Graph transferred to array successfully")
            }
            Err(e) => self.report(&e),
        }
    }

    fn sort(&mut self) -> io::Result<()> {
        match sort(&mut self.array) {
            Ok(()) => writeln!(self.out, "Array sorted successfully"),
            Err(Error::Empty) => {
                writeln!(self.out, "Array is empty. Transfer graph to array first.")
            }
            Err(e) => self.report(&e),
        }
    }

    fn process(&mut self) -> io::Result<()> {
        let rule = LengthRule::default();
        match find_matching(&self.array, &rule) {
            Ok(found) => render::matches(&mut self.out, found),
            Err(Error::Empty) => writeln!(self.out, "Array is empty"),
            Err(e) => writeln!(self.out, "Error: {e}"),
        }
    }

    fn save(&mut self) -> io::Result<()> {
        match save_to_path(&self.array, &self.data_file) {
            Ok(()) => writeln!(self.out, "Array saved to file: {}", self.data_file.display()),
            Err(e) => writeln!(self.out, "Failed to save array: {e}"),
        }
    }

    /// Replace the array only when the whole file decodes.
    fn load(&mut self) -> io::Result<()> {
        match load_from_path(&self.data_file) {
            Ok(array) => {
                self.array = array;
                writeln!(
                    self.out,
                    "Array loaded from file: {} ({} elements)",
                    self.data_file.display(),
                    self.array.len()
                )
            }
            Err(e) => writeln!(self.out, "Failed to load array: {e}"),
        }
    }

    fn report(&mut self, e: &Error) -> io::Result<()> {
        writeln!(self.out, "Error: {e}")
    }

    /// Prompt until a token parses as `T`. `None` on end of input.
    fn ask<T: FromStr>(&mut self, prompt: &str, what: &str) -> io::Result<Option<T>> {
        loop {
            write!(self.out, "{prompt}")?;
            self.out.flush()?;
            let Some(token) = self.tokens.next_token()? else {
                return Ok(None);
            };
            match token.parse::<T>() {
                Ok(value) => return Ok(Some(value)),
                Err(_) => {
                    writeln!(self.out, "Invalid input. Please enter a valid {what}.")?;
                    self.tokens.discard_line();
                }
            }
        }
    }
}

/// Graph capacity shown in the startup banner.
pub fn capacity_banner(graph: &GraphStore) -> String {
    format!(
        "{} of {} nodes in use, ~{} bytes",
        graph.node_count(),
        MAX_NODES,
        graph.memory_usage()
    )
}
