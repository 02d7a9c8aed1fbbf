// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.
//
// Boundary to the generative-AI service. Network faults and malformed
// payloads never escape this module: every public operation degrades to an
// absent result or a fixed localized sentence.

use once_cell::sync::Lazy;
use regex::Regex;
use rust_decimal::Decimal;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::{json, Value};
use thiserror::Error;

use crate::i18n;
use crate::models::{Category, Language, Transaction, TransactionType};
use crate::utils::http_client;

const BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
const FLASH_MODEL: &str = "gemini-3-flash-preview";
const PRO_MODEL: &str = "gemini-3-pro-preview";

// Each call carries its own bound; the advice model is slower.
const FLASH_TIMEOUT_SECS: u64 = 15;
const PRO_TIMEOUT_SECS: u64 = 60;

/// Anomaly detection needs a minimum sample before it is worth asking.
const ANOMALY_FLOOR: usize = 5;

#[derive(Debug, Error)]
enum AiError {
    #[error("GEMINI_API_KEY is not configured")]
    MissingCredential,
    #[error("AI transport failure")]
    Transport(#[source] anyhow::Error),
    #[error("AI response malformed: {0}")]
    Malformed(String),
}

/// Structured categorization guess. `amount`, `category` and `type` are
/// mandatory in the response schema; the rest may be absent.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryGuess {
    pub amount: Decimal,
    pub category: String,
    pub r#type: String,
    #[serde(default)]
    pub note: Option<String>,
    #[serde(default)]
    pub is_recurring: Option<bool>,
}

impl CategoryGuess {
    /// EXPENSE unless the guess unambiguously says income.
    pub fn transaction_type(&self) -> TransactionType {
        if self.r#type.to_uppercase() == "INCOME" {
            TransactionType::Income
        } else {
            TransactionType::Expense
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnomalyReport {
    pub has_anomaly: bool,
    pub explanation: String,
}

pub struct Gateway {
    api_key: Option<String>,
}

impl Gateway {
    pub fn new(api_key: Option<String>) -> Self {
        Gateway { api_key }
    }

    pub fn from_env() -> Self {
        let key = std::env::var("GEMINI_API_KEY")
            .ok()
            .filter(|k| !k.trim().is_empty());
        Gateway::new(key)
    }

    pub fn has_credential(&self) -> bool {
        self.api_key.is_some()
    }

    /// Extract transaction details from a free-text entry (English or
    /// Bengali). Absent credential, transport failure and unparseable
    /// payloads all yield `None`.
    pub fn categorize(&self, text: &str, categories: &[Category]) -> Option<CategoryGuess> {
        self.api_key.as_ref()?;

        let category_names = categories
            .iter()
            .map(|c| format!("{} ({})", c.name, c.name_bn))
            .collect::<Vec<_>>()
            .join(", ");
        let prompt = format!(
            "You are a professional financial assistant. \
             Analyze the following entry (English or Bengali) and extract transaction details.\n\
             Categories available: [{category_names}].\n\
             Entry: \"{text}\""
        );
        let schema = json!({
            "type": "OBJECT",
            "properties": {
                "amount": { "type": "NUMBER" },
                "category": { "type": "STRING" },
                "type": { "type": "STRING", "description": "INCOME or EXPENSE" },
                "note": { "type": "STRING" },
                "isRecurring": {
                    "type": "BOOLEAN",
                    "description": "If the text implies this happens every month/week"
                }
            },
            "required": ["amount", "category", "type"]
        });

        match self.generate(FLASH_MODEL, &prompt, Some(schema), FLASH_TIMEOUT_SECS) {
            Ok(raw) => parse_structured(&raw),
            Err(e) => {
                eprintln!("ai: categorization failed: {e}");
                None
            }
        }
    }

    /// Narrative spending report: pattern analysis, three savings tips and a
    /// next-month forecast, in the requested language. Returns a fixed
    /// localized sentence when the service or the data is unavailable.
    pub fn advise(&self, transactions: &[Transaction], language: Language) -> String {
        let labels = i18n::labels(language);
        if self.api_key.is_none() {
            return labels.service_unavailable.to_string();
        }
        if transactions.is_empty() {
            return labels.insufficient_data.to_string();
        }

        // Store order is newest-first, so the head of the list is the most
        // recent history.
        let summary = transactions
            .iter()
            .take(50)
            .map(|t| {
                format!(
                    "{}: {} {} BDT for {} ({})",
                    t.date, t.r#type, t.amount, t.category, t.note
                )
            })
            .collect::<Vec<_>>()
            .join("\n");

        let prompt = match language {
            Language::BN => format!(
                "আপনি একজন পেশাদার আর্থিক বিশ্লেষক। নিচে একজন ব্যবহারকারীর সাম্প্রতিক লেনদেনের তালিকা দেওয়া হলো:\n\n\
                 {summary}\n\n\
                 এই তথ্যের ভিত্তিতে একটি সংক্ষিপ্ত প্রফেশনাল রিপোর্ট তৈরি করুন। রিপোর্টে নিচের বিষয়গুলো থাকবে:\n\
                 ১. ব্যয়ের ধরণ বিশ্লেষণ।\n\
                 ২. টাকা বাঁচানোর জন্য ৩টি কার্যকরী পরামর্শ।\n\
                 ৩. সামনের মাসের জন্য একটি বাজেট পরিকল্পনা।\n\
                 উত্তরটি সরাসরি বাংলায় দিন।"
            ),
            Language::EN => format!(
                "You are a professional financial advisor. Analyze these recent transactions:\n\n\
                 {summary}\n\n\
                 Provide a professional financial report including:\n\
                 1. Spending pattern analysis.\n\
                 2. 3 highly actionable savings tips.\n\
                 3. A brief budget forecast for the next month.\n\
                 Respond in a professional tone."
            ),
        };

        match self.generate(PRO_MODEL, &prompt, None, PRO_TIMEOUT_SECS) {
            Ok(text) => text,
            Err(e) => {
                eprintln!("ai: advice failed: {e}");
                labels.service_unavailable.to_string()
            }
        }
    }

    /// Flag unusual spending. Below the sample floor the answer is absent
    /// before the credential is even consulted, so no network is touched.
    pub fn detect_anomalies(
        &self,
        transactions: &[Transaction],
        language: Language,
    ) -> Option<AnomalyReport> {
        if transactions.len() < ANOMALY_FLOOR {
            return None;
        }
        self.api_key.as_ref()?;

        let summary = transactions
            .iter()
            .map(|t| format!("{} {} BDT for {}", t.r#type, t.amount, t.category))
            .collect::<Vec<_>>()
            .join(", ");
        let explanation_lang = match language {
            Language::BN => "Bengali",
            Language::EN => "English",
        };
        let prompt = format!(
            "Review these transactions for any unusual spending patterns \
             (e.g. extremely high amount compared to others).\n\
             If found, explain why it looks suspicious. Data: [{summary}]"
        );
        let schema = json!({
            "type": "OBJECT",
            "properties": {
                "hasAnomaly": { "type": "BOOLEAN" },
                "explanation": {
                    "type": "STRING",
                    "description": format!("Professional explanation in {explanation_lang}")
                }
            },
            "required": ["hasAnomaly", "explanation"]
        });

        match self.generate(FLASH_MODEL, &prompt, Some(schema), FLASH_TIMEOUT_SECS) {
            Ok(raw) => parse_structured(&raw),
            Err(e) => {
                eprintln!("ai: anomaly detection failed: {e}");
                None
            }
        }
    }

    /// The advice/anomaly pair for the insights view, issued together and
    /// joined before either result is shown. Each call is bounded by its own
    /// client timeout rather than an open-ended dual await.
    pub fn insights(
        &self,
        transactions: &[Transaction],
        language: Language,
    ) -> (String, Option<AnomalyReport>) {
        std::thread::scope(|s| {
            let advice = s.spawn(|| self.advise(transactions, language));
            let anomaly = s.spawn(|| self.detect_anomalies(transactions, language));
            let advice = advice
                .join()
                .unwrap_or_else(|_| i18n::labels(language).service_unavailable.to_string());
            let anomaly = anomaly.join().unwrap_or(None);
            (advice, anomaly)
        })
    }

    fn generate(
        &self,
        model: &str,
        prompt: &str,
        response_schema: Option<Value>,
        timeout_secs: u64,
    ) -> Result<String, AiError> {
        let key = self.api_key.as_ref().ok_or(AiError::MissingCredential)?;

        let mut body = json!({
            "contents": [ { "parts": [ { "text": prompt } ] } ]
        });
        if let Some(schema) = response_schema {
            body["generationConfig"] = json!({
                "responseMimeType": "application/json",
                "responseSchema": schema
            });
        }

        let client = http_client(timeout_secs).map_err(AiError::Transport)?;
        let url = format!("{BASE_URL}/models/{model}:generateContent?key={key}");
        let resp = client
            .post(url)
            .json(&body)
            .send()
            .and_then(|r| r.error_for_status())
            .map_err(|e| AiError::Transport(e.into()))?;
        let decoded: GenerateResponse = resp
            .json()
            .map_err(|e| AiError::Transport(e.into()))?;

        let text = decoded
            .candidates
            .into_iter()
            .next()
            .map(|c| {
                c.content
                    .parts
                    .into_iter()
                    .map(|p| p.text)
                    .collect::<String>()
            })
            .unwrap_or_default();
        if text.is_empty() {
            return Err(AiError::Malformed("no candidate text".to_string()));
        }
        Ok(text)
    }
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: CandidateContent,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Deserialize)]
struct Part {
    #[serde(default)]
    text: String,
}

static FENCE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)^\s*```(?:json)?\s*(.*?)\s*```\s*$").unwrap());

/// Strict decode of a structured AI payload, tolerating a markdown code
/// fence around the JSON. Any structural mismatch is an absent result.
pub fn parse_structured<T: DeserializeOwned>(raw: &str) -> Option<T> {
    let cleaned = match FENCE.captures(raw) {
        Some(caps) => caps.get(1).map(|m| m.as_str()).unwrap_or(raw),
        None => raw.trim(),
    };
    match serde_json::from_str::<T>(cleaned) {
        Ok(v) => Some(v),
        Err(e) => {
            eprintln!("ai: structured payload rejected: {e}");
            None
        }
    }
}
