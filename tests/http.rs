use once_cell::sync::Lazy;
use reqwest::Client;
use serde::Deserialize;
use std::net::TcpListener;
use std::process::{Child, Command, Stdio};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::Mutex;
use tokio::time::sleep;

#[derive(Debug, Deserialize)]
struct JourneyResponse {
    date: String,
    streak: u32,
    todos: Vec<TaskResponse>,
    goals: Vec<GoalResponse>,
}

#[derive(Debug, Deserialize)]
struct TaskResponse {
    id: String,
    text: String,
    completed: bool,
    category: String,
}

#[derive(Debug, Deserialize)]
struct GoalResponse {
    name: String,
    progress: u8,
}

#[derive(Debug, Deserialize)]
struct TipResponse {
    text: String,
    date: String,
}

#[derive(Debug, Deserialize)]
struct QuoteResponse {
    text: String,
    author: String,
}

struct TestServer {
    base_url: String,
    child: Child,
}

impl Drop for TestServer {
    fn drop(&mut self) {
        let _ = self.child.kill();
        let _ = self.child.wait();
    }
}

static TEST_LOCK: Lazy<Mutex<()>> = Lazy::new(|| Mutex::new(()));
static SERVER: Lazy<Mutex<Option<Arc<TestServer>>>> = Lazy::new(|| Mutex::new(None));

#[cfg(unix)]
mod cleanup {
    use std::sync::Once;
    use std::sync::atomic::{AtomicI32, Ordering};

    static REGISTER: Once = Once::new();
    static PID: AtomicI32 = AtomicI32::new(0);

    pub fn register(pid: u32) {
        REGISTER.call_once(|| {
            PID.store(pid as i32, Ordering::SeqCst);
            unsafe {
                libc::atexit(on_exit);
            }
        });
    }

    extern "C" fn on_exit() {
        let pid = PID.load(Ordering::SeqCst);
        if pid > 0 {
            unsafe {
                libc::kill(pid, libc::SIGTERM);
            }
        }
    }
}

fn pick_free_port() -> u16 {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind random port");
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    port
}

fn unique_data_dir() -> String {
    let nanos = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap()
        .as_nanos();
    let mut path = std::env::temp_dir();
    path.push(format!("journey_http_{}_{}", std::process::id(), nanos));
    path.to_string_lossy().to_string()
}

async fn wait_until_ready(base_url: &str) {
    let client = Client::new();
    let deadline = Instant::now() + Duration::from_secs(3);
    loop {
        if let Ok(resp) = client.get(format!("{base_url}/api/journey")).send().await {
            if resp.status().is_success() {
                return;
            }
        }
        if Instant::now() > deadline {
            panic!("server did not become ready");
        }
        sleep(Duration::from_millis(100)).await;
    }
}

async fn spawn_server() -> TestServer {
    let port = pick_free_port();
    let data_dir = unique_data_dir();
    let child = Command::new(env!("CARGO_BIN_EXE_journey_tracker"))
        .env("PORT", port.to_string())
        .env("APP_DATA_DIR", data_dir)
        // Unreachable quote service: every fetch degrades to the local pools.
        .env("QUOTE_API_URL", "http://127.0.0.1:9/quotes")
        .env("NINJA_API_KEY", "")
        .env("RUST_LOG", "info")
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .spawn()
        .expect("failed to spawn server");

    #[cfg(unix)]
    cleanup::register(child.id());

    let base_url = format!("http://127.0.0.1:{port}");
    wait_until_ready(&base_url).await;

    TestServer { base_url, child }
}

async fn shared_server() -> Arc<TestServer> {
    let mut guard = SERVER.lock().await;
    if let Some(server) = guard.as_ref() {
        return Arc::clone(server);
    }
    let server = Arc::new(spawn_server().await);
    *guard = Some(Arc::clone(&server));
    server
}

async fn get_journey(client: &Client, base_url: &str) -> JourneyResponse {
    client
        .get(format!("{base_url}/api/journey"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap()
}

async fn post_journey(client: &Client, url: String, body: serde_json::Value) -> JourneyResponse {
    let response = client.post(url).json(&body).send().await.unwrap();
    assert!(response.status().is_success());
    response.json().await.unwrap()
}

#[tokio::test]
async fn http_fresh_store_starts_with_streak_one_and_default_goals() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();

    let journey = get_journey(&client, &server.base_url).await;
    assert_eq!(journey.streak, 1);
    assert!(!journey.date.is_empty());
    assert_eq!(journey.goals.len(), 4);
    assert!(journey.goals.iter().any(|g| g.name == "Mindfulness"));
}

#[tokio::test]
async fn http_task_lifecycle_add_toggle_reorder_delete() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();

    let before = get_journey(&client, &server.base_url).await;

    // Blank text is silently ignored.
    let journey = post_journey(
        &client,
        format!("{}/api/tasks", server.base_url),
        serde_json::json!({ "text": "   ", "category": "personal" }),
    )
    .await;
    assert_eq!(journey.todos.len(), before.todos.len());

    post_journey(
        &client,
        format!("{}/api/tasks", server.base_url),
        serde_json::json!({ "text": "buy milk", "category": "personal" }),
    )
    .await;
    let journey = post_journey(
        &client,
        format!("{}/api/tasks", server.base_url),
        serde_json::json!({ "text": "go for a run", "category": "health" }),
    )
    .await;
    assert_eq!(journey.todos.len(), before.todos.len() + 2);

    let first = journey
        .todos
        .iter()
        .find(|t| t.text == "buy milk")
        .expect("task should exist");
    assert!(!first.completed);
    assert_eq!(first.category, "personal");
    let first_id = first.id.clone();

    let journey = post_journey(
        &client,
        format!("{}/api/tasks/toggle", server.base_url),
        serde_json::json!({ "id": first_id }),
    )
    .await;
    assert!(
        journey
            .todos
            .iter()
            .find(|t| t.id == first_id)
            .unwrap()
            .completed
    );

    // Reverse the current order.
    let mut ids: Vec<String> = journey.todos.iter().map(|t| t.id.clone()).collect();
    ids.reverse();
    let journey = post_journey(
        &client,
        format!("{}/api/tasks/reorder", server.base_url),
        serde_json::json!({ "ids": ids }),
    )
    .await;
    let got: Vec<String> = journey.todos.iter().map(|t| t.id.clone()).collect();
    assert_eq!(got, ids);

    // A foreign id in the permutation leaves the order untouched.
    let mut foreign = ids.clone();
    foreign[0] = "not-a-real-task".to_string();
    let journey = post_journey(
        &client,
        format!("{}/api/tasks/reorder", server.base_url),
        serde_json::json!({ "ids": foreign }),
    )
    .await;
    let got: Vec<String> = journey.todos.iter().map(|t| t.id.clone()).collect();
    assert_eq!(got, ids);

    let journey = post_journey(
        &client,
        format!("{}/api/tasks/delete", server.base_url),
        serde_json::json!({ "id": first_id }),
    )
    .await;
    assert!(journey.todos.iter().all(|t| t.id != first_id));
}

#[tokio::test]
async fn http_goal_progress_clamps_to_bounds() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();

    let journey = post_journey(
        &client,
        format!("{}/api/goals/adjust", server.base_url),
        serde_json::json!({ "name": "Career", "delta": 1000 }),
    )
    .await;
    let career = journey.goals.iter().find(|g| g.name == "Career").unwrap();
    assert_eq!(career.progress, 100);

    let journey = post_journey(
        &client,
        format!("{}/api/goals/adjust", server.base_url),
        serde_json::json!({ "name": "Career", "delta": -1000 }),
    )
    .await;
    let career = journey.goals.iter().find(|g| g.name == "Career").unwrap();
    assert_eq!(career.progress, 0);

    // Unknown goal names change nothing.
    let journey = post_journey(
        &client,
        format!("{}/api/goals/adjust", server.base_url),
        serde_json::json!({ "name": "Chess", "delta": 10 }),
    )
    .await;
    assert_eq!(journey.goals.len(), 4);
}

#[tokio::test]
async fn http_quote_falls_back_to_local_pool() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();

    let quote: QuoteResponse = client
        .get(format!("{}/api/quote", server.base_url))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    assert!(!quote.text.is_empty());
    assert!(!quote.author.is_empty());
}

#[tokio::test]
async fn http_tip_is_stable_within_a_day() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();

    let first: TipResponse = client
        .get(format!("{}/api/tip", server.base_url))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert!(!first.text.is_empty());
    assert!(!first.date.is_empty());

    let second: TipResponse = client
        .get(format!("{}/api/tip", server.base_url))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(first.text, second.text);
    assert_eq!(first.date, second.date);
}
