use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::Utc;
use nutri_classify::{GrowthReference, classify};
use nutri_cli::config::Settings;
use nutri_cli::logging::redact_value;
use nutri_cli::service::{MeasureRequest, load_reference, open_store, record_measurement};
use nutri_model::{Child, ChildId, Measurement};
use nutri_report::{ChildSummary, export_csv, export_file_name, render_summary};
use nutri_store::Store;
use tracing::{info, info_span};

use crate::cli::{
    ChildrenArgs, ClassifyArgs, Cli, ExportArgs, MeasureArgs, RegisterArgs, SummaryArgs,
};
use crate::summary::{print_children, print_history, print_result};

/// Options shared by every subcommand.
pub struct AppContext {
    pub settings: Settings,
    pub store_dir: Option<PathBuf>,
    pub reference_dir: Option<PathBuf>,
    pub no_reference: bool,
}

impl AppContext {
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        let settings = Settings::load(cli.config.as_deref()).context("load settings")?;
        Ok(Self {
            settings,
            store_dir: cli.store_dir.clone(),
            reference_dir: cli.reference_dir.clone(),
            no_reference: cli.no_reference,
        })
    }

    fn store(&self) -> Result<Store> {
        open_store(&self.settings, self.store_dir.as_deref())
    }

    fn reference(&self) -> Result<Box<dyn GrowthReference>> {
        load_reference(
            &self.settings,
            self.reference_dir.as_deref(),
            self.no_reference,
        )
    }
}

pub fn run_classify(ctx: &AppContext, args: &ClassifyArgs) -> Result<()> {
    let measurement = Measurement::validated(
        args.age_months,
        args.sex.into(),
        args.body.weight_kg,
        args.body.height_cm,
        args.body.muac_mm,
    )
    .context("invalid measurement")?;
    let reference = ctx.reference()?;
    let result = classify(reference.as_ref(), &measurement);
    print_result(&result);
    Ok(())
}

pub fn run_register(ctx: &AppContext, args: &RegisterArgs) -> Result<()> {
    let mut store = ctx.store()?;
    let child = store
        .register_child(&args.caregiver, &args.name, args.age_months, args.sex.into())
        .context("register child")?;
    info!(child_id = %child.id, name = redact_value(&child.name), "registered");
    println!("Registered {} with ID {}", child.name, child.id);
    Ok(())
}

pub fn run_children(ctx: &AppContext, args: &ChildrenArgs) -> Result<()> {
    let store = ctx.store()?;
    let children: Vec<_> = store
        .children(args.caregiver.as_deref())
        .into_iter()
        .map(|child| (child, store.caregiver_of(child)))
        .collect();
    print_children(&children);
    Ok(())
}

pub fn run_measure(ctx: &AppContext, args: &MeasureArgs) -> Result<()> {
    let span = info_span!("measure", child_id = %args.child_id);
    let _guard = span.enter();
    let store = ctx.store()?;
    let reference = ctx.reference()?;
    let request = MeasureRequest {
        weight_kg: args.body.weight_kg,
        height_cm: args.body.height_cm,
        muac_mm: args.body.muac_mm,
        age_months: args.age_months,
    };
    let recorded = record_measurement(
        &store,
        reference.as_ref(),
        args.child_id,
        args.caregiver.as_deref(),
        &request,
        Utc::now(),
    )?;
    println!(
        "Recorded measurement for {} at {} months",
        recorded.child.name, recorded.record.age_months
    );
    print_result(&recorded.result);
    Ok(())
}

pub fn run_summary(ctx: &AppContext, args: &SummaryArgs) -> Result<()> {
    let store = ctx.store()?;
    let child = find_child(&store, args.child_id, args.caregiver.as_deref())?;
    let records = store
        .measurements(child.id)
        .with_context(|| format!("read history for child {}", child.id))?;
    let summary = ChildSummary::build(child, &records, args.last);
    if args.plain {
        println!("{}", render_summary(&summary));
    } else {
        print_history(&summary);
    }
    Ok(())
}

pub fn run_export(ctx: &AppContext, args: &ExportArgs) -> Result<()> {
    let store = ctx.store()?;
    let child = find_child(&store, args.child_id, args.caregiver.as_deref())?;
    let records = store
        .measurements(child.id)
        .with_context(|| format!("read history for child {}", child.id))?;
    let path = args
        .output
        .clone()
        .unwrap_or_else(|| PathBuf::from(export_file_name(child)));
    export_csv(&path, &records).with_context(|| format!("export to {}", path.display()))?;
    println!(
        "Exported {} measurements to {}",
        records.len(),
        path.display()
    );
    Ok(())
}

fn find_child<'a>(store: &'a Store, id: ChildId, caregiver: Option<&str>) -> Result<&'a Child> {
    let child = match caregiver {
        Some(name) => store.child_for(id, name),
        None => store.child(id),
    };
    child.with_context(|| format!("look up child {id}"))
}
