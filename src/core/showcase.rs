use crate::adapters::console::{ConsoleSink, ReportPrinter};
use crate::adapters::file::{FileSink, ReportFileWriter};
use crate::core::{ConfigProvider, Shape};
use crate::domain::model::{CustomerTier, Rectangle, Report, Square};
use crate::domain::ports::{Eatable, Workable};
use crate::domain::services::{DiscountCalculator, HumanWorker, RobotWorker, UserService};
use crate::utils::error::Result;
use std::io::Write;

/// Runs the five demonstrations in sequence against an injected writer and
/// config. The writer is the product output; diagnostics go through
/// `tracing`.
pub struct Showcase<W: Write, C: ConfigProvider> {
    out: W,
    config: C,
}

impl<W: Write, C: ConfigProvider> Showcase<W, C> {
    pub fn new(out: W, config: C) -> Self {
        Self { out, config }
    }

    pub fn run(&mut self) -> Result<()> {
        tracing::info!("Running the SOLID showcase");

        // SRP
        self.single_responsibility()?;
        // OCP
        self.open_closed()?;
        // LSP
        self.liskov_substitution()?;
        // ISP
        self.interface_segregation()?;
        // DIP
        self.dependency_inversion()?;

        Ok(())
    }

    /// The report holds data; a printer and a file writer each do one job.
    fn single_responsibility(&mut self) -> Result<()> {
        let report = Report::new("Report title", "Report content");

        ReportPrinter::new(&mut self.out).print(&report)?;
        ReportFileWriter::new(self.config.report_path()).write(&report)?;

        tracing::debug!("report written to {}", self.config.report_path());
        Ok(())
    }

    /// One strategy per tier; the calculator never changes when a tier is
    /// added. A mistyped tag used to silently charge full price; parsing
    /// now refuses it.
    fn open_closed(&mut self) -> Result<()> {
        for tag in ["Regular", "Premium", "VIP"] {
            let tier: CustomerTier = tag.parse()?;
            let calculator = DiscountCalculator::new(tier.strategy());
            writeln!(self.out, "Discount: {}", calculator.calculate(100.0))?;
        }

        if let Err(err) = "Gold".parse::<CustomerTier>() {
            writeln!(self.out, "Rejected: {err}")?;
        }

        Ok(())
    }

    /// Both shapes answer through the shared capability; nothing here knows
    /// which concrete shape it is measuring.
    fn liskov_substitution(&mut self) -> Result<()> {
        let rectangle = Rectangle::new(10, 20);
        let square = Square::new(10);
        let shapes: [&dyn Shape; 2] = [&rectangle, &square];

        for shape in shapes {
            writeln!(self.out, "Area: {}", shape.area())?;
        }

        Ok(())
    }

    /// The robot never has to answer for lunch.
    fn interface_segregation(&mut self) -> Result<()> {
        let human = HumanWorker;
        let robot = RobotWorker;

        writeln!(self.out, "{}", human.work())?;
        writeln!(self.out, "{}", human.eat())?;
        writeln!(self.out, "{}", robot.work())?;

        Ok(())
    }

    /// Same service, two sinks. Only the destination changes.
    fn dependency_inversion(&mut self) -> Result<()> {
        let username = self.config.username().to_string();

        let mut service = UserService::new(ConsoleSink::new(&mut self.out));
        service.register_user(&username)?;

        let mut service = UserService::new(FileSink::new(self.config.log_path()));
        service.register_user(&username)?;

        tracing::debug!("registration logged to {}", self.config.log_path());
        Ok(())
    }
}
