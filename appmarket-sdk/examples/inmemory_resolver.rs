/// 内存回执器示例
/// 展示 分发方构造回执地址 -> Handler 处理 -> Resolver 回执 的闭环
use anyhow::Result as AnyResult;
use appmarket_sdk::eventing::{EventHandler, InMemoryEventResolver, handle_and_resolve};
use appmarket_sdk::return_address::EventReturnAddress;
use async_trait::async_trait;
use tracing_subscriber::EnvFilter;

struct PrintHandler;

#[async_trait]
impl EventHandler for PrintHandler {
    type Event = String;

    fn handler_name(&self) -> &str {
        "print"
    }

    async fn handle(&self, event: String, return_address: &EventReturnAddress) -> AnyResult<()> {
        if event.is_empty() {
            anyhow::bail!("empty payload");
        }
        println!("handling {event} for {return_address}");
        Ok(())
    }
}

#[tokio::main]
async fn main() -> AnyResult<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "debug".into()))
        .init();

    let resolver = InMemoryEventResolver::new();

    let events = [
        ("evt-1", "SUBSCRIPTION_ORDER"),
        ("evt-2", ""),
    ];
    for (event_id, payload) in events {
        let address = EventReturnAddress::new(event_id, "https://market.example.com", "client-42")?;
        let outcome =
            handle_and_resolve(&PrintHandler, &resolver, payload.to_string(), address).await?;
        println!("{event_id}: {outcome:?}");
    }

    for resolution in resolver.resolutions().await {
        println!("{}", serde_json::to_string_pretty(&resolution)?);
    }
    Ok(())
}
