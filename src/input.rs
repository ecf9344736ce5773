use std::collections::VecDeque;
use std::io::{self, BufRead, Write};

use log::debug;

use crate::equation::Equation;
use crate::error::{Error, Result};

/// Reads whitespace-separated integers after `name = ` prompts. Tokens left
/// over on a line answer the following prompts.
pub struct Prompter<R, W> {
    reader:  R,
    writer:  W,
    pending: VecDeque<String>,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self {
            reader,
            writer,
            pending: VecDeque::new(),
        }
    }

    pub fn read_i64(&mut self, name: &'static str) -> Result<i64> {
        write!(self.writer, "{} = ", name)?;
        self.writer.flush()?;
        let token = self.next_token(name)?;
        debug!("{} = {:?}", name, token);
        parse_i64(&token)
    }

    pub fn read_equation(&mut self) -> Result<Equation> {
        let a = self.read_i64("a")?;
        let b = self.read_i64("b")?;
        let c = self.read_i64("c")?;
        Ok(Equation::new(a, b, c))
    }

    fn next_token(&mut self, name: &'static str) -> Result<String> {
        loop {
            if let Some(token) = self.pending.pop_front() {
                return Ok(token);
            }
            let mut line = String::new();
            if self.reader.read_line(&mut line)? == 0 {
                return Err(Error::UnexpectedEof(name));
            }
            self.pending
                .extend(line.split_whitespace().map(str::to_owned));
        }
    }
}

pub fn parse_i64(token: &str) -> Result<i64> {
    token
        .parse::<i64>()
        .map_err(|_| Error::InvalidInteger(token.to_owned()))
}

/// Prompts on stdout and reads from stdin. Both locks are released on return.
pub fn prompt_equation() -> Result<Equation> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut prompter = Prompter::new(stdin.lock(), stdout.lock());
    prompter.read_equation()
}
