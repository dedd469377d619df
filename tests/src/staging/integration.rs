#![cfg(test)]
use std::fs;

use anyhow::Result;
use hopper_common::calendar::date_from_year_doy;
use hopper_core::{create_directory, create_link, tar_files};
use tempfile::tempdir;

use crate::util;

/// Walks the staging steps a pipeline run performs: resolve the acquisition
/// date, lay out the work directory, point `latest` at it, and bundle the
/// products. Each filesystem step is repeated once to cover re-runs over a
/// partially staged order.
#[test]
fn staging_a_product_end_to_end() -> Result<()> {
    util::init_logging();
    let root = tempdir()?;

    let date = date_from_year_doy(2020, 60)?;
    let product = format!("product_{}", date.format("%Y%m%d"));
    assert_eq!(product, "product_20200229");

    let work = root.path().join("work").join(&product);
    create_directory(&work)?;
    create_directory(&work)?;

    let band = util::write_file(&work, "band1.img", "imagery");
    let meta = util::write_file(&work, "metadata.xml", "<meta/>");

    let latest = root.path().join("latest");
    create_link(&work, &latest)?;
    create_link(&work, &latest)?;
    assert_eq!(fs::read_link(&latest)?, work);

    let archive = tar_files(&root.path().join(&product), &[&band, &meta], true)?;
    assert_eq!(archive, root.path().join(format!("{product}.tar.gz")));
    assert!(fs::metadata(&archive)?.len() > 0);

    Ok(())
}
