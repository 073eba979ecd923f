// ============================================================
// Layer 6 — Split Exporter
// ============================================================
// Writes the prepared splits to a directory so other tools can
// consume them without re-running the pipeline.
//
// Output layout:
//   <dir>/
//     train.json            ← [{"text": "...", "label": "sci.med"}, ...]
//     dev.json
//     test.json             ← only when a test split was loaded
//     label_counts.csv      ← split,category,count
//     prepare_config.json   ← the PrepareConfig that produced them
//
// Reference: serde_json crate documentation
//            Rust Book §12 (I/O and File Handling)

use anyhow::{Context, Result};
use std::{
    fs::{self, File},
    io::{BufWriter, Write},
    path::PathBuf,
};

use crate::application::prepare_use_case::{PrepareConfig, Splits};
use crate::data::dataset::NewsDataset;

/// Writes datasets and their config into one directory.
pub struct SplitExporter {
    dir: PathBuf,
}

impl SplitExporter {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Write every split, the per-label counts, and the config.
    pub fn export(&self, splits: &Splits, cfg: &PrepareConfig) -> Result<()> {
        fs::create_dir_all(&self.dir)
            .with_context(|| format!("Cannot create export directory '{}'", self.dir.display()))?;

        let mut named: Vec<(&str, &NewsDataset)> = vec![("train", &splits.train), ("dev", &splits.dev)];
        if let Some(test) = &splits.test {
            named.push(("test", test));
        }

        for (name, dataset) in &named {
            self.write_dataset(name, dataset)?;
        }
        self.write_label_counts(&named)?;
        self.write_config(cfg)?;

        tracing::info!("Exported {} splits to '{}'", named.len(), self.dir.display());
        Ok(())
    }

    fn write_dataset(&self, name: &str, dataset: &NewsDataset) -> Result<()> {
        let path   = self.dir.join(format!("{name}.json"));
        let writer = BufWriter::new(
            File::create(&path).with_context(|| format!("Cannot create '{}'", path.display()))?,
        );

        serde_json::to_writer(writer, dataset.examples())
            .with_context(|| format!("Cannot write '{}'", path.display()))?;

        tracing::debug!("Wrote {} examples to '{}'", dataset.examples().len(), path.display());
        Ok(())
    }

    fn write_label_counts(&self, named: &[(&str, &NewsDataset)]) -> Result<()> {
        let path  = self.dir.join("label_counts.csv");
        let mut f = BufWriter::new(File::create(&path)?);

        writeln!(f, "split,category,count")?;
        for (name, dataset) in named {
            for (category, count) in dataset.label_counts() {
                writeln!(f, "{name},{category},{count}")?;
            }
        }
        f.flush()?;
        Ok(())
    }

    fn write_config(&self, cfg: &PrepareConfig) -> Result<()> {
        let path = self.dir.join("prepare_config.json");
        let json = serde_json::to_string_pretty(cfg)?;

        fs::write(&path, json)
            .with_context(|| format!("Cannot write config to '{}'", path.display()))?;
        Ok(())
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{category::CategorySet, example::NewsExample};

    fn splits() -> Splits {
        let categories = CategorySet::new(["sci.med", "comp.graphics"]).unwrap();
        let ds = |items: &[(&str, &str)]| {
            NewsDataset::new(
                items.iter().map(|(t, l)| NewsExample::new(*t, *l)).collect(),
                categories.clone(),
            )
            .unwrap()
        };
        Splits {
            train: ds(&[("a b", "sci.med"), ("c", "comp.graphics")]),
            dev:   ds(&[("d", "sci.med")]),
            test:  Some(ds(&[("e", "comp.graphics")])),
        }
    }

    #[test]
    fn test_export_round_trips_examples() {
        let tmp = tempfile::tempdir().unwrap();
        let dir = tmp.path().join("export");
        SplitExporter::new(&dir)
            .export(&splits(), &PrepareConfig::default())
            .unwrap();

        let json: Vec<NewsExample> =
            serde_json::from_str(&fs::read_to_string(dir.join("train.json")).unwrap()).unwrap();
        assert_eq!(json, splits().train.examples().to_vec());
        assert!(dir.join("test.json").is_file());
    }

    #[test]
    fn test_label_counts_csv() {
        let tmp      = tempfile::tempdir().unwrap();
        let exporter = SplitExporter::new(tmp.path());
        exporter.export(&splits(), &PrepareConfig::default()).unwrap();

        let csv = fs::read_to_string(tmp.path().join("label_counts.csv")).unwrap();
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines[0], "split,category,count");
        assert!(lines.contains(&"train,sci.med,1"));
        assert!(lines.contains(&"dev,comp.graphics,0"));
        assert!(lines.contains(&"test,comp.graphics,1"));
    }

    #[test]
    fn test_config_is_readable_back() {
        let tmp = tempfile::tempdir().unwrap();
        SplitExporter::new(tmp.path())
            .export(&splits(), &PrepareConfig::default())
            .unwrap();

        let json = fs::read_to_string(tmp.path().join("prepare_config.json")).unwrap();
        let cfg: PrepareConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(cfg.categories, CategorySet::default());
        assert_eq!(cfg.train_dir, "20news-bydate-train");
    }
}
