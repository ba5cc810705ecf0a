use std::{
    io::Write,
    process::{Command, Output, Stdio},
};

#[derive(Debug)]
/// A wrapper around the rama-negotiate binary.
pub(super) struct NegotiateCli;

impl NegotiateCli {
    fn command() -> Result<Command, Box<dyn std::error::Error>> {
        Ok(escargot::CargoBuild::new()
            .package("rama-negotiate-cli")
            .bin("rama-negotiate")
            .target_dir("./target/")
            .run()?
            .command())
    }

    /// Run the cli with the given arguments, returning its raw output.
    pub(super) fn output(args: Vec<&'static str>) -> Result<Output, Box<dyn std::error::Error>> {
        Ok(Self::command()?.args(args).output()?)
    }

    /// Run the cli with the given arguments, expecting success and returning stdout.
    pub(super) fn run(args: Vec<&'static str>) -> Result<String, Box<dyn std::error::Error>> {
        let output = Self::output(args)?;
        assert!(output.status.success(), "output: {output:?}");
        Ok(String::from_utf8(output.stdout)?)
    }

    /// Run the cli feeding `stdin` as header lines, expecting success and returning stdout.
    pub(super) fn run_with_stdin(
        args: Vec<&'static str>,
        stdin: &str,
    ) -> Result<String, Box<dyn std::error::Error>> {
        let mut child = Self::command()?
            .args(args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .spawn()?;

        child
            .stdin
            .take()
            .ok_or("no stdin for child process")?
            .write_all(stdin.as_bytes())?;

        let output = child.wait_with_output()?;
        assert!(output.status.success(), "output: {output:?}");
        Ok(String::from_utf8(output.stdout)?)
    }
}
