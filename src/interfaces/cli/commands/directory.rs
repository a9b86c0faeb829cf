//! Customer and domain listings

use colored::Colorize;

use crate::interfaces::cli::{App, CliError};

pub fn list_customers(app: &App, partner: Option<&str>) -> Result<(), CliError> {
    let owner = partner.map(|id| app.directory.get_partner(id)).transpose()?;
    let customers = app.directory.list_customers(partner);
    if app.json {
        return app.print_json(&customers);
    }
    if customers.is_empty() {
        println!("{} No customers found", "ℹ".bold().blue());
        return Ok(());
    }
    match &owner {
        Some(partner) => println!("{} {}", "Customers of".bold().green(), partner.name.bold()),
        None => println!("{}", "Customers:".bold().green()),
    }
    for customer in &customers {
        println!(
            "  {} {} {}",
            customer.id.cyan(),
            customer.name,
            format!("(partner {})", customer.partner_id).dimmed()
        );
    }
    Ok(())
}

pub fn list_domains(app: &App, customer_id: &str) -> Result<(), CliError> {
    let customer = app.directory.get_customer(customer_id)?;
    let domains = app.directory.list_domains(customer_id);
    if app.json {
        return app.print_json(&domains);
    }
    if domains.is_empty() {
        println!("{} {} has no domains", "ℹ".bold().blue(), customer.name);
        return Ok(());
    }
    println!("{} {}", "Domains of".bold().green(), customer.name.bold());
    for domain in &domains {
        println!("  {}", domain.name.blue());
    }
    Ok(())
}
