use serde_json::{json, Value};

/// Regenerates the bundled fallback snapshot (`data/llm_releases.json`)
/// used when the timeline API is unreachable.
fn main() {
    let releases: Vec<Value> = vec![
        json!({
            "id": "gpt2",
            "name": "GPT-2",
            "provider": "OpenAI",
            "releaseDate": "2019-02-14",
            "parameters": "1.5B",
            "context_window": 1,
            "modality": ["text"],
            "architecture": "Transformer decoder",
            "features": ["Zero-shot task transfer", "Staged release"],
            "notableAchievements": ["Sparked the large-scale LM release debate"],
            "trainingData": "WebText (40GB of curated web pages)",
            "documentation": "https://openai.com/research/better-language-models",
            "publicAccess": true,
            "apiAvailable": false
        }),
        json!({
            "id": "t5",
            "name": "T5",
            "provider": "Google",
            "releaseDate": "2019-10-23",
            "parameters": "11B",
            "modality": ["text"],
            "architecture": "Encoder-decoder Transformer",
            "publicAccess": true
        }),
        json!({
            "id": "gpt3",
            "name": "GPT-3",
            "provider": "OpenAI",
            "releaseDate": "2020-06-11",
            "parameters": "175B",
            "context_window": 2,
            "modality": ["text"],
            "notableAchievements": ["Few-shot in-context learning at scale"],
            "documentation": "https://arxiv.org/abs/2005.14165",
            "publicAccess": false,
            "apiAvailable": true
        }),
        json!({
            "id": "gopher",
            "name": "Gopher",
            "provider": "DeepMind",
            "releaseDate": "2021-12-08",
            "parameters": "280B",
            "modality": ["text"],
            "publicAccess": false
        }),
        json!({
            "id": "palm",
            "name": "PaLM",
            "provider": "Google",
            "releaseDate": "2022-04-04",
            "parameters": "540B",
            "modality": ["text"],
            "architecture": "Dense decoder (Pathways)",
            "publicAccess": false
        }),
        json!({
            "id": "llama",
            "name": "LLaMA",
            "provider": "Meta",
            "releaseDate": "2023-02-24",
            "parameters": "65B",
            "context_window": 2,
            "modality": ["text"],
            "features": ["Research-license weights"],
            "publicAccess": true
        }),
        json!({
            "id": "gpt4",
            "name": "GPT-4",
            "provider": "OpenAI",
            "releaseDate": "2023-03-14",
            "parameters": "1.8T",
            "context_window": 128,
            "modality": ["text", "image"],
            "notableAchievements": ["Passed the bar exam in the 90th percentile"],
            "documentation": "https://arxiv.org/abs/2303.08774",
            "publicAccess": false,
            "apiAvailable": true
        }),
        json!({
            "id": "mixtral",
            "name": "Mixtral 8x7B",
            "provider": "Mistral AI",
            "releaseDate": "2023-12-11",
            "parameters": "46.7B",
            "context_window": 32,
            "modality": ["text"],
            "architecture": "Sparse mixture of experts",
            "publicAccess": true,
            "apiAvailable": true
        }),
        json!({
            "id": "gemini15",
            "name": "Gemini 1.5 Pro",
            "provider": "Google",
            "releaseDate": "2024-02-15",
            "context_window": 1000,
            "modality": ["text", "image", "audio", "video"],
            "features": ["Million-token context window"],
            "publicAccess": false,
            "apiAvailable": true
        }),
        json!({
            "id": "claude3",
            "name": "Claude 3 Opus",
            "provider": "Anthropic",
            "releaseDate": "2024-03-04",
            "context_window": 200,
            "modality": ["text", "image"],
            "publicAccess": false,
            "apiAvailable": true
        }),
    ];

    let n_releases = releases.len();
    let snapshot = json!({
        "releases": releases,
        "metadata": {
            "source": "curated snapshot",
            "generated_by": "generate_sample",
            "coverage": "major model releases since GPT-2"
        }
    });

    let output_path = "data/llm_releases.json";
    let mut contents =
        serde_json::to_string_pretty(&snapshot).expect("Failed to serialize snapshot");
    contents.push('\n');
    std::fs::create_dir_all("data").expect("Failed to create data directory");
    std::fs::write(output_path, contents).expect("Failed to write snapshot");

    println!("Wrote {n_releases} releases to {output_path}");
}
