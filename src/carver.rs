// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Carver - the iteration driver.
//!
//! Derives the vertical/horizontal seam targets from the
//! configuration, then loops: grayscale the current raster, build a
//! fresh energy map, locate the needed seam or seams, cut, repeat
//! until both counters reach their targets.  The energy map is always
//! recomputed from the current raster; nothing is cached across
//! iterations because every iteration shrinks the image.
//!
//! When both directions still have work in the same iteration, the
//! two seam locates read the same immutable energy map and run on
//! separate scoped threads; the cut waits for both.

use crate::cq;
use crate::energy;
use crate::error::CarveError;
use crate::seamfinder::{self, Axis};
use crate::seamremover;
use image::{imageops, RgbImage};
use std::io::Write;
use std::path::Path;

/// Which side or sides of the image get carved.
#[derive(Debug, PartialEq, Eq, Copy, Clone)]
pub enum CarveMode {
    Vertical,
    Horizontal,
    Both,
}

/// How much gets carved: a proportion of the side length, or an
/// absolute pixel count.
#[derive(Debug, PartialEq, Copy, Clone)]
pub enum CarveAmount {
    Proportion(f64),
    Count(u32),
}

impl Default for CarveAmount {
    fn default() -> Self {
        CarveAmount::Proportion(0.15)
    }
}

/// The full configuration of a carve.  No process-wide state; the
/// verbosity flag and the smoothing switch ride along here.
#[derive(Debug, Copy, Clone)]
pub struct CarveConfig {
    pub mode: CarveMode,
    pub amount: CarveAmount,
    pub verbose: bool,
    pub smooth: bool,
}

impl CarveConfig {
    pub fn new(mode: CarveMode, amount: CarveAmount) -> Self {
        CarveConfig {
            mode,
            amount,
            verbose: false,
            smooth: true,
        }
    }
}

/// Holds the carving target and its configuration.
pub struct Carver {
    image: RgbImage,
    config: CarveConfig,
}

impl Carver {
    pub fn new(image: RgbImage, config: CarveConfig) -> Self {
        Carver { image, config }
    }

    // Resolve the configuration into (columns, rows) to remove.
    // Configuration problems surface here, before any work is done.
    fn targets(&self) -> Result<(u32, u32), CarveError> {
        let (columns, rows) = self.image.dimensions();
        let carve_columns = self.config.mode != CarveMode::Horizontal;
        let carve_rows = self.config.mode != CarveMode::Vertical;

        match self.config.amount {
            CarveAmount::Proportion(proportion) => {
                if proportion < 0.0 || proportion > 1.0 {
                    return Err(CarveError::Proportion { proportion });
                }
                // A full-proportion carve still has to leave one
                // column or row behind.
                let derive = |length: u32| {
                    ((f64::from(length) * proportion) as u32).min(length - 1)
                };
                Ok((
                    cq!(carve_columns, derive(columns), 0),
                    cq!(carve_rows, derive(rows), 0),
                ))
            }
            CarveAmount::Count(count) => {
                if carve_columns && count >= columns {
                    return Err(CarveError::Count {
                        count,
                        side: "width",
                        length: columns,
                    });
                }
                if carve_rows && count >= rows {
                    return Err(CarveError::Count {
                        count,
                        side: "height",
                        length: rows,
                    });
                }
                Ok((cq!(carve_columns, count, 0), cq!(carve_rows, count, 0)))
            }
        }
    }

    /// Run the carving iterations and return the reduced image.
    pub fn carve(&self) -> Result<RgbImage, CarveError> {
        let (columns_target, rows_target) = self.targets()?;
        self.log(&format!(
            "Removing {} columns and {} rows",
            columns_target, rows_target
        ));

        let mut target = self.image.clone();
        let (mut columns_done, mut rows_done) = (0, 0);

        while columns_done < columns_target || rows_done < rows_target {
            let grayscale = imageops::grayscale(&target);
            let energy = energy::estimate(&grayscale, self.config.smooth);

            if columns_done < columns_target && rows_done < rows_target {
                // Independent reads of one immutable map; join both
                // before cutting.
                let (vertical_seam, horizontal_seam) = crossbeam::thread::scope(|scope| {
                    let vertical = scope.spawn(|_| seamfinder::locate(&energy, Axis::Vertical));
                    let horizontal =
                        scope.spawn(|_| seamfinder::locate(&energy, Axis::Horizontal));
                    (vertical.join().unwrap(), horizontal.join().unwrap())
                })
                .unwrap();
                target = seamremover::remove_both(&target, &vertical_seam, &horizontal_seam);
                columns_done += 1;
                rows_done += 1;
            } else if columns_done < columns_target {
                let seam = seamfinder::locate(&energy, Axis::Vertical);
                target = seamremover::remove_vertical(&target, &seam);
                columns_done += 1;
            } else {
                let seam = seamfinder::locate(&energy, Axis::Horizontal);
                target = seamremover::remove_horizontal(&target, &seam);
                rows_done += 1;
            }

            self.print_status(columns_done, rows_done, columns_target, rows_target);
        }

        if self.config.verbose {
            println!();
        }
        Ok(target)
    }

    fn print_status(&self, columns: u32, rows: u32, columns_target: u32, rows_target: u32) {
        let column_status = cq!(
            columns >= columns_target,
            "READY".to_string(),
            format!("{}/{}", columns, columns_target)
        );
        let row_status = cq!(
            rows >= rows_target,
            "READY".to_string(),
            format!("{}/{}", rows, rows_target)
        );
        self.log_overwrite(&format!(
            "Processing column {} and row {}   ",
            column_status, row_status
        ));
    }

    fn log(&self, message: &str) {
        if self.config.verbose {
            println!("{}", message);
        }
    }

    fn log_overwrite(&self, message: &str) {
        if self.config.verbose {
            print!("\r{}", message);
            let _ = std::io::stdout().flush();
        }
    }
}

/// Decode an image, carve it, and write the result.  Nothing is
/// written unless the whole carve succeeded.
pub fn carve_file(input: &Path, output: &Path, config: CarveConfig) -> Result<(), CarveError> {
    let image = image::open(input)
        .map_err(|e| CarveError::Decode {
            path: input.display().to_string(),
            cause: e.to_string(),
        })?
        .to_rgb();

    let carver = Carver::new(image, config);
    carver.log(&format!(
        "Loaded image {} with dimensions {}x{}",
        input.display(),
        carver.image.width(),
        carver.image.height()
    ));

    let target = carver.carve()?;
    target.save(output).map_err(|e| CarveError::Encode {
        path: output.display().to_string(),
        cause: e.to_string(),
    })?;
    carver.log(&format!("Saved output image as {}", output.display()));
    Ok(())
}
