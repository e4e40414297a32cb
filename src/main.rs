use clap::{Parser, Subcommand};

use crate::cmd::{calc::CalcCommand, echo::EchoCommand};
use crate::tax::Contract;

mod cmd;
mod latex;
mod money;
mod tax;

#[derive(Parser, Debug)]
#[command(name = "mokesciai", version)]
#[command(about = "Lithuanian payroll and royalty tax breakdowns, typeset for LaTeX")]
struct Opts {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Royalty contract without employment
    #[command(name = "autorine-be-darbo", visible_alias = "autorine_be_darbo")]
    RoyaltyWithoutEmployment(CalcCommand),
    /// Royalty contract alongside employment
    #[command(name = "autorine-su-darbu", visible_alias = "autorine_su_darbu")]
    RoyaltyWithEmployment(CalcCommand),
    /// Employment contract, with the tax-exempt amount
    #[command(name = "darbo")]
    Employment(CalcCommand),
    /// Print the given arguments, numbered
    Echo(EchoCommand),
}

fn main() -> anyhow::Result<()> {
    pretty_env_logger::init();

    let opts = Opts::parse();
    match opts.command {
        Command::RoyaltyWithoutEmployment(cmd) => cmd.exec(Contract::RoyaltyWithoutEmployment),
        Command::RoyaltyWithEmployment(cmd) => cmd.exec(Contract::RoyaltyWithEmployment),
        Command::Employment(cmd) => cmd.exec(Contract::Employment),
        Command::Echo(cmd) => cmd.exec(),
    }
}
