use compreg_codegen::{BuildCtx, BuildError, GeneratorConfig};

fn main() -> Result<(), BuildError> {
	let ctx = BuildCtx::from_env()?;
	ctx.generate(GeneratorConfig::default())?;
	Ok(())
}
