//! Echo command - shows how arguments arrive from the calling document

use clap::Args;

#[derive(Args, Debug)]
pub struct EchoCommand {
    /// Arguments to print back
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    args: Vec<String>,
}

impl EchoCommand {
    pub fn exec(&self) -> anyhow::Result<()> {
        print!("{}", format_args_list(&self.args));
        Ok(())
    }
}

fn format_args_list(args: &[String]) -> String {
    args.iter()
        .enumerate()
        .map(|(i, arg)| format!("[{}]: {}\n\n\n", i, arg))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numbers_each_argument() {
        let args = vec!["darbo".to_string(), "1000".to_string()];
        assert_eq!(format_args_list(&args), "[0]: darbo\n\n\n[1]: 1000\n\n\n");
    }

    #[test]
    fn nothing_to_print() {
        assert_eq!(format_args_list(&[]), "");
    }
}
