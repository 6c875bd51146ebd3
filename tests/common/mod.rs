//! Shared fixtures for integration tests

#![allow(dead_code)]

use design_grader_rust::data::cell_ref;
use design_grader_rust::rules::constraint_table::BETA_COMBAT;
use design_grader_rust::{TableName, Workbook};

/// Main-table columns of the nine mission legs
const LEG_COLUMNS: [u32; 9] = [11, 12, 13, 14, 16, 18, 19, 22, 23];
const LEG_ALTITUDE: [f64; 9] = [0.0, 20_000.0, 35_000.0, 35_000.0, 35_000.0, 30_000.0, 35_000.0, 35_000.0, 10_000.0];
const LEG_MACH: [f64; 9] = [0.2, 0.6, 0.9, 0.9, 1.8, 1.2, 1.8, 0.9, 0.4];
const LEG_AFTERBURNER: [f64; 9] = [100.0, 0.0, 0.0, 0.0, 0.0, 100.0, 0.0, 0.0, 0.0];

/// Constraint-table rows: S..Y = beta, altitude, Mach, n, AB, Ps, CDx
///
/// X12 and X13 double as the field lengths and must read 0 for the Ps check.
const CONSTRAINT_ROWS: [(u32, [f64; 7]); 8] = [
    (3, [BETA_COMBAT, 35_000.0, 2.2, 1.0, 100.0, 0.0, 0.0]),
    (4, [BETA_COMBAT, 35_000.0, 1.8, 1.0, 0.0, 0.0, 0.0]),
    (6, [BETA_COMBAT, 30_000.0, 1.2, 4.0, 100.0, 0.0, 0.0]),
    (7, [BETA_COMBAT, 10_000.0, 0.9, 4.5, 100.0, 0.0, 0.0]),
    (8, [BETA_COMBAT, 30_000.0, 1.15, 1.0, 100.0, 500.0, 0.0]),
    (9, [BETA_COMBAT, 10_000.0, 0.9, 1.0, 0.0, 500.0, 0.0]),
    (12, [1.0, 0.0, 1.2, 0.03, 100.0, 0.0, 0.0]),
    (13, [1.0, 0.0, 1.3, 0.5, 0.0, 0.0, 0.0]),
];

const CURVE_ROWS: [u32; 7] = [23, 24, 26, 27, 28, 29, 32];

/// A design that satisfies every rubric check and meets every objective
pub fn passing_record() -> Workbook {
    let mut wb = Workbook::with_file_name("passing_design.xlsm");

    // Aero polar updated from the template
    for (cell, value) in [("G3", 0.5), ("G4", 0.6), ("G10", 0.02), ("G11", 0.03), ("A15", 1.0), ("A16", 2.0)] {
        wb.set(TableName::Aerodynamics, cell, value);
    }

    // Mission legs
    for (leg, &col) in LEG_COLUMNS.iter().enumerate() {
        wb.set(TableName::Main, &cell_ref(33, col), LEG_ALTITUDE[leg]);
        wb.set(TableName::Main, &cell_ref(35, col), LEG_MACH[leg]);
        wb.set(TableName::Main, &cell_ref(36, col), LEG_AFTERBURNER[leg]);
    }
    wb.set(TableName::Main, "P38", 150.0);
    wb.set(TableName::Main, "S38", 150.0);
    wb.set(TableName::Main, "R39", 2.0);
    wb.set(TableName::Main, "W39", 20.0);
    wb.set(TableName::Main, "Y37", 410.0);

    // Thrust exceeds drag everywhere
    for col in 3..=14 {
        wb.set(TableName::Mission, &cell_ref(48, col), 1000.0);
        wb.set(TableName::Mission, &cell_ref(49, col), 2000.0);
    }

    // Constraint table, payload and field lengths
    for (row, values) in CONSTRAINT_ROWS {
        for (offset, value) in values.iter().enumerate() {
            wb.set(TableName::Main, &cell_ref(row, 19 + offset as u32), *value);
        }
    }
    wb.set(TableName::Main, "AB3", 8.0);
    wb.set(TableName::Main, "AB4", 2.0);

    // Constraint diagram: flat curves well under the design point
    for col in 11..=31 {
        let ws = 20.0 + 5.0 * f64::from(col - 11);
        wb.set(TableName::Constants, &cell_ref(22, col), ws);
        for row in CURVE_ROWS {
            wb.set(TableName::Constants, &cell_ref(row, col), 0.5);
        }
    }
    wb.set(TableName::Constants, "L33", 100.0);
    wb.set(TableName::Main, "P13", 60.0);
    wb.set(TableName::Main, "Q13", 1.2);

    // Attachment geometry
    for (cell, value) in [
        ("B32", 60.0),
        ("B23", 20.0),
        ("C23", 50.0),
        ("H23", 48.0),
        ("C25", 0.0),
        ("D52", 0.0),
        ("F52", 6.0),
        ("H24", 2.0),
        ("E52", 6.0),
    ] {
        wb.set(TableName::Main, cell, value);
    }
    wb.set(TableName::Geometry, "C8", 10.0);
    wb.set(TableName::Geometry, "C10", 12.0);

    // Planform areas: no strake; PCS flat, vertical tail upright
    for (cell, value) in [("B18", 400.0), ("C18", 80.0), ("D18", 0.0), ("H18", 60.0), ("C26", 0.0), ("H27", 90.0)] {
        wb.set(TableName::Main, cell, value);
    }
    // Wing LE and TE both swept 45°, PCS LE matching
    for (row, x, y) in [
        (38, 20.0, 0.0),
        (39, 40.0, 20.0),
        (40, 45.0, 20.0),
        (41, 25.0, 0.0),
        (115, 50.0, 0.0),
        (116, 60.0, 10.0),
    ] {
        wb.set(TableName::Geometry, &cell_ref(row, 12), x);
        wb.set(TableName::Geometry, &cell_ref(row, 14), y);
    }

    // Stability derivatives
    for (cell, value) in [("M10", 0.05), ("O10", -0.002), ("P10", 0.003), ("Q10", -0.5)] {
        wb.set(TableName::Main, cell, value);
    }

    // Fuel and cost
    wb.set(TableName::Main, "F31", 500.0);
    wb.set(TableName::Main, "F32", 450.0);
    wb.set(TableName::Main, "N31", 187.0);
    wb.set(TableName::Main, "Q31", 100.0);

    // Landing gear
    for (cell, value) in [("J20", 90.0), ("L20", 10.0), ("L21", 15.0), ("M20", 50.0), ("M21", 63.0), ("N20", 150.0)] {
        wb.set(TableName::Gear, cell, value);
    }

    wb
}

/// Lines that announce a deduction
pub fn deduction_lines(log: &str) -> Vec<&str> {
    log.lines().filter(|line| line.starts_with('-')).collect()
}
