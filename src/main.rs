use anyhow::Result;
use std::sync::Arc;
use tenant_core::{
    application::{
        instrumentation::OrganizationLogger,
        ports::{ids::IdGenerator, kv::KvStore, logging::LogSink, time::Clock},
    },
    config::{AppConfig, DEFAULT_LOG_FILTER},
    domain::{
        find_options::{FindOptions, SortKey},
        id::PlatformId,
        organization::{NewOrganization, OrganizationFilter, OrganizationService, OrganizationUpdate},
        resource_mapping::{
            ResourceType, UserResourceMapping, UserResourceMappingFilter,
            UserResourceMappingService,
        },
    },
    infrastructure::{
        InMemoryKvStore, InMemoryOrganizationService, KvUserResourceMappingService,
        SequentialIdGenerator, SystemClock, TracingLogSink, telemetry,
    },
};

#[tokio::main]
async fn main() {
    if let Err(err) = bootstrap().await {
        tracing::error!(error = %err, "fatal error");
        eprintln!("fatal error: {err}");
        std::process::exit(1);
    }
}

async fn bootstrap() -> Result<()> {
    let filter = telemetry::init_tracing(DEFAULT_LOG_FILTER);
    let config = AppConfig::from_env()?;
    telemetry::apply_filter(&filter, config.log_filter())?;

    let kv: Arc<dyn KvStore> = Arc::new(InMemoryKvStore::default());
    let mappings: Arc<dyn UserResourceMappingService> =
        Arc::new(KvUserResourceMappingService::new(Arc::clone(&kv)));
    let clock: Arc<dyn Clock> = Arc::new(SystemClock);
    let ids: Arc<dyn IdGenerator> = Arc::new(SequentialIdGenerator::new(config.id_seed()));

    let backend: Arc<dyn OrganizationService> = Arc::new(InMemoryOrganizationService::new(
        Arc::clone(&clock),
        Arc::clone(&ids),
        Arc::clone(&mappings),
    ));
    let sink: Arc<dyn LogSink> = Arc::new(TracingLogSink::new());
    let orgs: Arc<dyn OrganizationService> =
        Arc::new(OrganizationLogger::new(Arc::clone(&sink), Arc::clone(&backend)));

    let owner = config.demo_owner();
    for name in config.seed_orgs() {
        let org = orgs
            .create_organization(NewOrganization::new(name.as_str(), ""))
            .await?;
        mappings
            .create_mapping(UserResourceMapping::owner(owner, ResourceType::Orgs, org.id))
            .await?;
        orgs.update_organization(
            org.id,
            OrganizationUpdate::describe(format!("seeded for {owner}")),
        )
        .await?;
    }

    let (owned, count) = orgs
        .find_organizations(
            OrganizationFilter::for_user(owner),
            FindOptions::default().sorted_by(SortKey::Name, false),
        )
        .await?;
    for org in &owned {
        tracing::info!(id = %org.id, name = %org.name, "owned organization");
    }
    tracing::info!(%owner, count, "organizations visible to demo owner");

    // The failure path is logged by the middleware; here it is only reported.
    let unknown = PlatformId::new(u64::MAX)?;
    if let Err(err) = orgs.find_organization_by_id(unknown).await {
        tracing::info!(kind = %err.kind(), "lookup of unknown organization rejected");
    }

    if let Some(first) = owned.first() {
        orgs.delete_organization(first.id).await?;
        let remaining = mappings
            .find_mappings(UserResourceMappingFilter::for_user(owner, ResourceType::Orgs))
            .await?;
        tracing::info!(remaining = remaining.len(), "mappings left after delete");
    }

    Ok(())
}
