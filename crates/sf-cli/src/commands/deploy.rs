//! Deploy command implementation
//!
//! Render, execute, publish — in that order. Publishing runs only after
//! the deployment succeeded, and a publish failure is reported without
//! rolling the deployment back; the two steps are not transactional.

use anyhow::{Context, Result};
use sf_git::{GitHubPublisher, PublishOutcome};
use std::path::Path;

use crate::cli::{DeployArgs, GlobalArgs};
use crate::commands::common::load_spec;
use crate::context::RuntimeContext;

/// Execute the deploy command
pub async fn execute(args: &DeployArgs, global: &GlobalArgs) -> Result<()> {
    let ctx = RuntimeContext::new(global)?;
    let spec = load_spec(Path::new(&args.definition))?;
    let ddl = sf_sql::render(&spec);

    if args.check {
        sf_sql::check_syntax(spec.kind, &ddl).context("Rendered DDL failed the syntax check")?;
    }

    println!("Deploying {} {} ...", spec.kind, spec.qualified_name());
    ctx.verbose(&format!("Executing on {} backend:\n{}", ctx.db.db_type(), ddl));
    let rows = ctx.db.execute(&ddl).await.context("Deployment failed")?;

    println!("Deployment successful.");
    for row in &rows {
        println!("  {}", row.join(", "));
    }

    if args.no_publish {
        return Ok(());
    }
    let Some(git) = &ctx.config.git else {
        ctx.verbose("No git configuration; skipping publish");
        return Ok(());
    };

    let path = sf_git::object_sql_path(&spec.schema, spec.kind, &spec.name);
    let message = args.message.clone().unwrap_or_else(|| {
        format!(
            "Deploy {} {} ({})",
            spec.kind,
            spec.qualified_name(),
            chrono::Utc::now().format("%Y-%m-%d %H:%M UTC")
        )
    });

    // A failed publish is reported, not raised: the object is already live
    match GitHubPublisher::from_config(git) {
        Ok(publisher) => match publisher.publish(&path, &ddl, &message).await {
            Ok(PublishOutcome::Created) => println!("Published {} (created)", path),
            Ok(PublishOutcome::Updated) => println!("Published {} (updated)", path),
            Err(e) => eprintln!("Publish failed: {}", e),
        },
        Err(e) => eprintln!("Publish skipped: {}", e),
    }

    Ok(())
}
