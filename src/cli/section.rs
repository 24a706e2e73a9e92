use anyhow::Result;

pub async fn run(
    prompt: String,
    config: Option<String>,
    model: Option<String>,
    dry_run: bool,
) -> Result<()> {
    let orchestrator = super::build_orchestrator(config, model, dry_run)?;
    let section = orchestrator.generate_custom_section(&prompt).await?;

    println!("{}\n\n{}", section.section_title, section.section_description);
    Ok(())
}
