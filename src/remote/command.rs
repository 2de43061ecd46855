// ABOUTME: Argument-vector and remote shell command construction.
// ABOUTME: Local processes get discrete argv tokens; remote commands are quoted token by token.

use std::borrow::Cow;
use std::fmt;

/// A local process invocation as a program plus discrete arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandLine {
    program: String,
    args: Vec<String>,
}

impl CommandLine {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
        }
    }

    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    pub fn get_args(&self) -> &[String] {
        &self.args
    }

    /// Program followed by its arguments.
    pub fn to_argv(&self) -> Vec<String> {
        std::iter::once(self.program.clone())
            .chain(self.args.iter().cloned())
            .collect()
    }
}

impl fmt::Display for CommandLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", quote(&self.program))?;
        for arg in &self.args {
            write!(f, " {}", quote(arg))?;
        }
        Ok(())
    }
}

/// A command line for the remote shell, built one token at a time.
///
/// Plain arguments are quoted as needed. Paths keep a leading `~/` outside
/// the quotes so the remote shell still expands it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteCommand {
    tokens: Vec<String>,
}

impl RemoteCommand {
    pub fn new(program: &str) -> Self {
        Self {
            tokens: vec![quote(program).into_owned()],
        }
    }

    pub fn arg(mut self, arg: &str) -> Self {
        self.tokens.push(quote(arg).into_owned());
        self
    }

    pub fn path(mut self, path: &str) -> Self {
        self.tokens.push(quote_path(path));
        self
    }

    /// Discard the command's stderr (`2>/dev/null`).
    pub fn silence_stderr(mut self) -> Self {
        self.tokens.push("2>/dev/null".to_string());
        self
    }

    /// Feed stdout into `next` (`|`).
    pub fn pipe(mut self, next: RemoteCommand) -> Self {
        self.tokens.push("|".to_string());
        self.tokens.extend(next.tokens);
        self
    }

    /// The single string handed to `ssh` as the remote command.
    pub fn render(&self) -> String {
        self.tokens.join(" ")
    }
}

impl fmt::Display for RemoteCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

fn is_safe(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.' | '/' | ':' | '=' | '@' | ',' | '+')
}

/// Quote `token` for a POSIX shell unless it only holds safe characters.
pub fn quote(token: &str) -> Cow<'_, str> {
    if !token.is_empty() && token.chars().all(is_safe) {
        return Cow::Borrowed(token);
    }
    Cow::Owned(format!("'{}'", token.replace('\'', "'\\''")))
}

/// Like [`quote`], but leaves a leading `~/` bare for tilde expansion.
pub fn quote_path(path: &str) -> String {
    match path.strip_prefix("~/") {
        Some("") => "~/".to_string(),
        Some(rest) => format!("~/{}", quote(rest)),
        None => quote(path).into_owned(),
    }
}
