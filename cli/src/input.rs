use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};
use std::process::Command;

use tracing::debug;

use crate::error::CliError;

/// Seed for the editor buffer; every line is a comment so an untouched
/// buffer compiles to an empty class.
pub const INITIAL_MESSAGE: &str = r#"
    # PASTE YOUR DJANGO MODEL FIELDS: VARIABLE_NAME = models.VARIABLE_TYPE(attributes). A field may span several lines. e.g.:
    # question = models.CharField(verbose_name="Title of the question", max_length=255, blank=False, null=False)
    # answer = models.CharField(verbose_name="Answer to the question", config_name='simple_toolbar', blank=True, null=True)
    # expert = models.ForeignKey('Expert', verbose_name='Expert', on_delete=models.SET_NULL, null=True, blank=True)
    # score = models.IntegerField(default=0, help_text="Score of the answer to the question")
"#;

const VIM_LIKE: [&str; 5] = ["vi", "vim", "nvim", "gvim", "mvim"];

/// Supplies the raw field declarations to compile.
pub trait InputSource {
    fn read_input(&self) -> Result<String, CliError>;
}

pub struct FileInput {
    path: PathBuf,
}

impl FileInput {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

impl InputSource for FileInput {
    fn read_input(&self) -> Result<String, CliError> {
        debug!(path = %self.path.display(), "reading declarations from file");
        Ok(fs::read_to_string(&self.path)?)
    }
}

pub struct StdinInput;

impl InputSource for StdinInput {
    fn read_input(&self) -> Result<String, CliError> {
        debug!("reading declarations from stdin");
        let mut text = String::new();
        io::stdin().read_to_string(&mut text)?;
        Ok(text)
    }
}

/// Opens `editor` on a scratch file seeded with [`INITIAL_MESSAGE`] and
/// returns what was saved.
pub struct EditorInput {
    editor: String,
}

impl EditorInput {
    pub fn new(editor: String) -> Self {
        Self { editor }
    }

    fn failure(&self, reason: impl Into<String>) -> CliError {
        CliError::Editor {
            editor: self.editor.clone(),
            reason: reason.into(),
        }
    }
}

impl InputSource for EditorInput {
    fn read_input(&self) -> Result<String, CliError> {
        let mut scratch = tempfile::Builder::new()
            .prefix("django2dart-")
            .suffix(".py")
            .tempfile()?;
        scratch.write_all(INITIAL_MESSAGE.as_bytes())?;
        scratch.flush()?;

        // `EDITOR` may carry arguments, e.g. "code --wait".
        let mut parts = self.editor.split_whitespace();
        let program = parts.next().ok_or_else(|| self.failure("empty editor command"))?;

        let mut command = Command::new(program);
        command.args(parts);
        if is_vim_like(program) {
            // Write in place so the scratch path keeps pointing at the edited content.
            command.arg("+set backupcopy=yes");
        }
        command.arg(scratch.path());

        debug!(editor = %self.editor, path = %scratch.path().display(), "launching editor");
        let status = command.status().map_err(|e| self.failure(e.to_string()))?;
        if !status.success() {
            return Err(self.failure(format!("exited with {}", status)));
        }

        Ok(fs::read_to_string(scratch.path())?)
    }
}

fn is_vim_like(program: &str) -> bool {
    Path::new(program)
        .file_name()
        .and_then(|name| name.to_str())
        .is_some_and(|name| VIM_LIKE.contains(&name))
}
