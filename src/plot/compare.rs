use super::color::Color;
use crate::profile::{write_profiles, Profile};
use crate::utils::{write_atomically, Result};
use lineplot::{generate_image, ImageFormat, LinePlot, Point, Series};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

const OBSERVED_LABEL: &str = "observed";
const RANDOM_LABEL: &str = "random";
const REVERSE_COMPLEMENT_LABEL: &str = "reverse complement";

/// Profiles of one property over the sets being compared.
#[derive(Debug)]
pub struct Comparison<'a> {
    pub property: &'a str,
    pub observed: &'a Profile,
    pub random: &'a Profile,
    pub reverse_complement: Option<&'a Profile>,
}

impl Comparison<'_> {
    fn series(&self) -> Vec<(&'static str, Color, &Profile)> {
        let mut series = vec![
            (OBSERVED_LABEL, Color::Blue, self.observed),
            (RANDOM_LABEL, Color::Gray, self.random),
        ];
        if let Some(profile) = self.reverse_complement {
            series.push((REVERSE_COMPLEMENT_LABEL, Color::Orange, profile));
        }
        series
    }

    pub fn to_plot(&self) -> LinePlot {
        let series = self
            .series()
            .into_iter()
            .map(|(label, color, profile)| Series {
                label: label.to_string(),
                color: color.to_string(),
                segments: split_at_gaps(profile),
            })
            .collect();
        LinePlot {
            title: self.property.to_string(),
            x_label: "Offset from TSS".to_string(),
            y_label: format!("Mean {}", self.property),
            series,
        }
    }

    /// Writes the chart and its values table into `output_dir`, returning both paths.
    pub fn present(&self, output_dir: &Path, format: ImageFormat) -> Result<(PathBuf, PathBuf)> {
        let image_path = output_path(output_dir, self.property, format.extension());
        generate_image(&self.to_plot(), &image_path)?;

        let table_path = output_path(output_dir, self.property, "tsv");
        let columns: Vec<(&str, &Profile)> = self
            .series()
            .into_iter()
            .map(|(label, _, profile)| (column_name(label), profile))
            .collect();
        write_atomically(&table_path, |writer| write_profiles(writer, &columns))?;

        log::info!(
            "Wrote {} comparison to {} and {}",
            self.property,
            image_path.display(),
            table_path.display()
        );
        Ok((image_path, table_path))
    }
}

fn column_name(label: &str) -> &str {
    match label {
        REVERSE_COMPLEMENT_LABEL => "reverse_complement",
        other => other,
    }
}

/// Breaks the profile into runs of consecutive offsets, so the anchor shows as a gap.
fn split_at_gaps(profile: &Profile) -> Vec<Vec<Point>> {
    let mut segments: Vec<Vec<Point>> = Vec::new();
    let mut previous: Option<i32> = None;
    for (&offset, &mean) in &profile.means {
        let contiguous = previous.and_then(|p| p.checked_add(1)) == Some(offset);
        match segments.last_mut() {
            Some(segment) if contiguous => segment.push((offset as f64, mean)),
            _ => segments.push(vec![(offset as f64, mean)]),
        }
        previous = Some(offset);
    }
    segments
}

/// Fails if two property names would be written to the same files.
pub fn check_output_names<'a, I>(properties: I) -> Result<()>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut seen: HashMap<String, &str> = HashMap::new();
    for property in properties {
        if let Some(other) = seen.insert(sanitize_name(property), property) {
            return Err(format!(
                "Properties {:?} and {:?} map to the same output name {}",
                other,
                property,
                sanitize_name(property)
            ));
        }
    }
    Ok(())
}

/// `<output_dir>/<property>.<extension>` with the property name made file-safe.
fn output_path(output_dir: &Path, property: &str, extension: &str) -> PathBuf {
    output_dir.join(format!("{}.{}", sanitize_name(property), extension))
}

fn sanitize_name(name: &str) -> String {
    let sanitized: String = name
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '_' | '.' | '-') {
                c
            } else {
                '_'
            }
        })
        .collect();
    if sanitized.is_empty() {
        "property".to_string()
    } else {
        sanitized
    }
}
