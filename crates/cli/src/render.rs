//! Text formatting of registry and store outcomes.

use std::io::{self, Write};

use dealership_infra::{LoadReport, SaveReport, StoreError};
use dealership_inventory::{
    AddError, AvailableListing, CarAdded, CarSold, CarView, DailyReport, SellError,
};

const SEPARATOR: &str = "----------------------";

pub fn car_added(out: &mut impl Write, added: &CarAdded) -> io::Result<()> {
    writeln!(
        out,
        "Car added: ID {} ({} {}) Initial Price: {:.2}",
        added.car_id, added.model, added.register_year, added.initial_price
    )
}

pub fn add_error(out: &mut impl Write, err: &AddError) -> io::Result<()> {
    match err {
        AddError::IdsExhausted => writeln!(out, "Error: No more car IDs available. Car not added."),
    }
}

pub fn car_sold(out: &mut impl Write, sold: &CarSold) -> io::Result<()> {
    writeln!(
        out,
        "Success: Car with ID {} ({}) sold for {:.2}.",
        sold.car_id, sold.model, sold.sale_price
    )
}

pub fn sell_error(out: &mut impl Write, err: &SellError) -> io::Result<()> {
    match err {
        SellError::NotFound(id) => writeln!(out, "Error: Car with ID {id} not found."),
        SellError::AlreadySold(id) => writeln!(out, "Car with ID {id} already sold!"),
    }
}

fn car(out: &mut impl Write, view: &CarView, price_label: &str) -> io::Result<()> {
    writeln!(out, "ID: {}", view.id)?;
    writeln!(out, "Model: {}", view.model)?;
    writeln!(out, "Register Year: {}", view.register_year)?;
    writeln!(out, "{price_label}: {:.2}", view.price)?;
    writeln!(out, "Status: {}", view.status.label())?;
    writeln!(out, "{SEPARATOR}")
}

pub fn available(out: &mut impl Write, listing: &AvailableListing) -> io::Result<()> {
    writeln!(out, "--- Available Cars ---")?;
    if listing.is_empty() {
        return writeln!(out, "No cars currently available for sale.");
    }
    for view in &listing.cars {
        car(out, view, "Actual Price")?;
    }
    Ok(())
}

pub fn daily_report(out: &mut impl Write, report: &DailyReport) -> io::Result<()> {
    writeln!(out, "----------- Day Report ---------")?;
    writeln!(out, "----------- Sold Cars ---------")?;
    for view in &report.sold {
        car(out, view, "Sale Price")?;
    }

    writeln!(out, "----------- Not Sold Cars ---------")?;
    for view in &report.available {
        car(out, view, "Actual Price")?;
    }

    writeln!(
        out,
        "Summary: Sold - {}, Available - {}, Revenue - {:.2}",
        report.sold_count(),
        report.available_count(),
        report.revenue()
    )?;
    writeln!(out, "----------------------------------")
}

pub fn empty_inventory(out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "Car inventory is currently empty.")
}

pub fn loaded(out: &mut impl Write, location: &str, report: &LoadReport) -> io::Result<()> {
    for skipped in &report.skipped {
        writeln!(
            out,
            "Warning: skipped line {} ('{}'): {}",
            skipped.line_no, skipped.content, skipped.reason
        )?;
    }
    writeln!(out, "Cars loaded from {location}. Total cars: {}", report.loaded)
}

pub fn saved(out: &mut impl Write, location: &str, report: &SaveReport) -> io::Result<()> {
    writeln!(out, "Inventory saved to {location} ({} cars).", report.written)
}

pub fn store_error(out: &mut impl Write, err: &StoreError) -> io::Result<()> {
    match err {
        StoreError::Open { .. } | StoreError::Read { .. } => {
            writeln!(out, "Warning: {err}. Starting with an empty inventory.")
        }
        StoreError::Write { .. } => writeln!(out, "Error: {err}"),
    }
}
