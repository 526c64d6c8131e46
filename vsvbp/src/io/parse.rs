use std::io::{BufRead, Write};

use crate::io::ext_repr::{ExtInstance, ExtItem};
use anyhow::{Context, Result, bail, ensure};
use itertools::Itertools;

/// Parses an instance in the text format described in [`crate::io`].
/// Blank lines are ignored.
pub fn parse(reader: impl BufRead) -> Result<ExtInstance> {
    let mut lines = reader
        .lines()
        .enumerate()
        .filter(|(_, l)| l.as_ref().map_or(true, |l| !l.trim().is_empty()));

    let mut next_line = |what: &str| -> Result<(usize, Vec<u64>)> {
        let Some((idx, line)) = lines.next() else {
            bail!("unexpected end of file, expected {what}");
        };
        let line = line?;
        let values = line
            .split_whitespace()
            .map(|v| v.parse::<u64>())
            .collect::<Result<Vec<u64>, _>>()
            .with_context(|| format!("line {}: invalid {what}: {line:?}", idx + 1))?;
        Ok((idx + 1, values))
    };

    let (ln, dims) = next_line("number of dimensions")?;
    ensure!(dims.len() == 1, "line {ln}: expected a single number of dimensions");
    let dimensions = usize::try_from(dims[0])?;

    let (ln, capacities) = next_line("bin capacities")?;
    ensure!(
        capacities.len() == dimensions,
        "line {ln}: expected {dimensions} capacities, found {}",
        capacities.len()
    );

    let (ln, n) = next_line("number of item types")?;
    ensure!(n.len() == 1, "line {ln}: expected a single number of item types");
    let n_types = usize::try_from(n[0])?;

    let mut items = Vec::with_capacity(n_types);
    for _ in 0..n_types {
        let (ln, mut values) = next_line("item type")?;
        ensure!(
            values.len() == dimensions + 1,
            "line {ln}: expected {} values (requirements and demand), found {}",
            dimensions + 1,
            values.len()
        );
        let demand = values.pop().unwrap_or_default();
        items.push(ExtItem {
            requirements: values,
            demand,
        });
    }

    if let Some((idx, _)) = lines.next() {
        bail!("line {}: expected {n_types} item types, found more", idx + 1);
    }

    Ok(ExtInstance {
        dimensions,
        capacities,
        items,
    })
}

/// Writes an instance in the text format described in [`crate::io`].
pub fn write(ext_instance: &ExtInstance, mut writer: impl Write) -> Result<()> {
    writeln!(writer, "{}", ext_instance.dimensions)?;
    writeln!(writer, "{}", ext_instance.capacities.iter().join(" "))?;
    writeln!(writer, "{}", ext_instance.items.len())?;
    for item in &ext_instance.items {
        writeln!(writer, "{} {}", item.requirements.iter().join(" "), item.demand)?;
    }
    Ok(())
}
