use festivo_infra::FestivoContext;
use std::fmt::Debug;
use tracing::error;

#[async_trait::async_trait(?Send)]
pub trait UseCase {
    type Response;
    type Error;

    /// UseCase name identifier
    const NAME: &'static str;

    async fn execute(&mut self, ctx: &FestivoContext) -> Result<Self::Response, Self::Error>;
}

/// Runs the given usecase inside a tracing span carrying its name.
/// Errors are logged here, controllers only translate them to HTTP.
#[tracing::instrument(name = "Executing usecase", skip(usecase, ctx), fields(usecase = U::NAME))]
pub async fn execute<U>(mut usecase: U, ctx: &FestivoContext) -> Result<U::Response, U::Error>
where
    U: UseCase,
    U::Error: Debug,
{
    let res = usecase.execute(ctx).await;

    if let Err(e) = &res {
        error!("Use case: {} failed with error: {:?}", U::NAME, e);
    }

    res
}
