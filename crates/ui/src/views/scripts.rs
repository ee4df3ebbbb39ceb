//! JS run inside the webview for the capabilities Rust cannot reach
//! directly: the microphone and the platform speech recognizer.

use serde::Deserialize;

/// Final message from the recording script. The script also reports an
/// `error` string, which only matters for webview debugging.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct RecordingResult {
    pub ok: bool,
    #[serde(default)]
    pub audio: Option<String>,
}

/// Final message from the speech-recognition script.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct SpeechResult {
    pub ok: bool,
    #[serde(default)]
    pub transcript: Option<String>,
}

/// Records one take from the microphone and resolves with the base64
/// audio once `window.__recallStopRecording()` fires. The stream's
/// tracks are stopped on the way out, success or error.
pub(crate) const RECORD_AUDIO_JS: &str = r#"
(async function() {
    if (!navigator.mediaDevices || !navigator.mediaDevices.getUserMedia) {
        dioxus.send({ ok: false, error: "no microphone support" });
        return;
    }
    try {
        const stream = await navigator.mediaDevices.getUserMedia({ audio: true });
        const recorder = new MediaRecorder(stream, { mimeType: "audio/webm" });
        const chunks = [];
        recorder.ondataavailable = (event) => { chunks.push(event.data); };
        recorder.onstop = () => {
            stream.getTracks().forEach((track) => track.stop());
            const blob = new Blob(chunks, { type: "audio/webm" });
            const reader = new FileReader();
            reader.onloadend = () => {
                const base64 = String(reader.result).split(",")[1] || "";
                dioxus.send({ ok: true, audio: base64 });
            };
            reader.readAsDataURL(blob);
        };
        window.__recallStopRecording = () => {
            if (recorder.state === "recording") { recorder.stop(); }
        };
        recorder.start();
    } catch (err) {
        dioxus.send({ ok: false, error: String(err) });
    }
})();
"#;

/// Asks the in-flight recording script to wrap up.
pub(crate) const STOP_RECORDING_JS: &str =
    "window.__recallStopRecording && window.__recallStopRecording();";

/// Captures a single utterance through the webview speech recognizer.
pub(crate) const SPEECH_RECOGNITION_JS: &str = r#"
(function() {
    const Recognition = window.SpeechRecognition || window.webkitSpeechRecognition;
    if (!Recognition) {
        dioxus.send({ ok: false });
        return;
    }
    const recognition = new Recognition();
    recognition.lang = "en-US";
    recognition.interimResults = false;
    recognition.continuous = false;
    let sent = false;
    recognition.onresult = (event) => {
        sent = true;
        dioxus.send({ ok: true, transcript: event.results[0][0].transcript });
    };
    recognition.onerror = () => {
        if (!sent) { sent = true; dioxus.send({ ok: false }); }
    };
    recognition.onend = () => {
        if (!sent) { dioxus.send({ ok: false }); }
    };
    recognition.start();
})();
"#;

/// Browser print dialog for the results card.
pub(crate) const PRINT_JS: &str = "window.print();";
