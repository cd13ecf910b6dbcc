use crate::errors::FetchError;
use crate::models::Quote;
use rand::Rng;
use serde::Deserialize;
use std::{env, time::Duration};
use tracing::warn;

pub const QUOTE_CATEGORY: &str = "inspirational";
pub const TIP_CATEGORY: &str = "happiness";

const DEFAULT_BASE_URL: &str = "https://api.api-ninjas.com/v1/quotes";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(5);

/// One entry of a local fallback pool. Tips carry no author.
pub struct FallbackQuote {
    pub text: &'static str,
    pub author: &'static str,
}

pub static LOCAL_QUOTES: &[FallbackQuote] = &[
    FallbackQuote {
        text: "You are not a drop in the ocean. You are the entire ocean in a drop.",
        author: "Rumi",
    },
    FallbackQuote {
        text: "She believed she could, so she did.",
        author: "R.S. Grey",
    },
    FallbackQuote {
        text: "The future belongs to those who believe in the beauty of their dreams.",
        author: "Eleanor Roosevelt",
    },
    FallbackQuote {
        text: "You are enough just as you are.",
        author: "Meghan Markle",
    },
    FallbackQuote {
        text: "I have learned not to allow rejection to move me.",
        author: "Cicely Tyson",
    },
    FallbackQuote {
        text: "Above all, be the heroine of your life, not the victim.",
        author: "Nora Ephron",
    },
    FallbackQuote {
        text: "I'm not afraid of storms, for I'm learning how to sail my ship.",
        author: "Louisa May Alcott",
    },
    FallbackQuote {
        text: "The most difficult thing is the decision to act, the rest is merely tenacity.",
        author: "Amelia Earhart",
    },
    FallbackQuote {
        text: "Life is not about waiting for the storm to pass, it's about learning to dance in the rain.",
        author: "Vivian Greene",
    },
    FallbackQuote {
        text: "The question isn't who's going to let me; it's who is going to stop me.",
        author: "Ayn Rand",
    },
];

pub static FALLBACK_TIPS: &[FallbackQuote] = &[
    FallbackQuote {
        text: "Take a moment to celebrate your progress, no matter how small. You're growing stronger every day!",
        author: "",
    },
    FallbackQuote {
        text: "Remember to breathe deeply and take breaks when needed.",
        author: "",
    },
    FallbackQuote {
        text: "Stay hydrated and nourish your body today.",
        author: "",
    },
    FallbackQuote {
        text: "Practice self-compassion and be kind to yourself.",
        author: "",
    },
    FallbackQuote {
        text: "Take small steps towards your goals - they all count!",
        author: "",
    },
];

#[derive(Debug, Deserialize)]
struct RemoteQuote {
    quote: String,
    author: String,
}

/// Client for the external quote service. An empty API key is allowed; the
/// request then fails and callers land on the local pool.
#[derive(Clone)]
pub struct QuoteClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl QuoteClient {
    pub fn from_env() -> Self {
        Self::new(
            env::var("QUOTE_API_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string()),
            env::var("NINJA_API_KEY").unwrap_or_default(),
        )
    }

    pub fn new(base_url: String, api_key: String) -> Self {
        Self {
            http: reqwest::Client::builder()
                .timeout(REQUEST_TIMEOUT)
                .build()
                .unwrap_or_default(),
            base_url,
            api_key,
        }
    }

    async fn fetch(&self, category: &str) -> Result<Quote, FetchError> {
        let response = self
            .http
            .get(&self.base_url)
            .query(&[("category", category)])
            .header("X-Api-Key", &self.api_key)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status));
        }

        // The service answers with a one-element array.
        let mut payload: Vec<RemoteQuote> = response.json().await?;
        if payload.is_empty() {
            return Err(FetchError::MalformedPayload);
        }
        let remote = payload.swap_remove(0);
        Ok(Quote {
            text: remote.quote,
            author: remote.author,
        })
    }

    /// The shared fetch-with-local-fallback path: any failure degrades to a
    /// uniform random pick from `pool` within the same call.
    pub async fn fetch_or_fallback(&self, category: &str, pool: &[FallbackQuote]) -> Quote {
        match self.fetch(category).await {
            Ok(quote) => quote,
            Err(err) => {
                warn!("quote fetch for '{category}' failed, using local pool: {err}");
                random_from_pool(pool)
            }
        }
    }
}

fn random_from_pool(pool: &[FallbackQuote]) -> Quote {
    let entry = &pool[rand::thread_rng().gen_range(0..pool.len())];
    Quote {
        text: entry.text.to_string(),
        author: entry.author.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Port 9 (discard) refuses connections immediately, so the fetch fails
    /// without any live service involved.
    fn unreachable_client() -> QuoteClient {
        QuoteClient::new("http://127.0.0.1:9/quotes".to_string(), String::new())
    }

    #[tokio::test]
    async fn failed_fetch_falls_back_to_local_quote_pool() {
        let client = unreachable_client();
        let quote = client.fetch_or_fallback(QUOTE_CATEGORY, LOCAL_QUOTES).await;
        assert!(
            LOCAL_QUOTES
                .iter()
                .any(|entry| entry.text == quote.text && entry.author == quote.author)
        );
    }

    #[tokio::test]
    async fn failed_fetch_falls_back_to_tip_pool_without_author() {
        let client = unreachable_client();
        let tip = client.fetch_or_fallback(TIP_CATEGORY, FALLBACK_TIPS).await;
        assert!(FALLBACK_TIPS.iter().any(|entry| entry.text == tip.text));
        assert!(tip.author.is_empty());
    }
}
