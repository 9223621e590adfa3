use axum::response::Html;

/// The single page. Validation and state transitions mirror `client::session`.
pub async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="id">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>AI Roaster 💀 - Cek Seberapa Hancur Seleramu</title>
    <meta name="description" content="Berani upload fotomu? Biarkan AI menilai (dan menghina) seleramu dengan jujur dan pedas. Siapkan mental sebelum klik!">
    <meta property="og:title" content="AI Roaster 💀 - Berani Coba?">
    <meta property="og:description" content="Cek seberapa hancur seleramu menurut AI. Awas baper!">
    <meta property="og:type" content="website">
    <meta property="og:locale" content="id_ID">
    <style>
        * { margin: 0; padding: 0; box-sizing: border-box; }

        body {
            font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;
            background: linear-gradient(135deg, #1f1c2c 0%, #3a1c1c 100%);
            min-height: 100vh;
            display: flex;
            align-items: center;
            justify-content: center;
            padding: 20px;
            color: #eee;
        }

        .container {
            background: #15151c;
            border-radius: 20px;
            box-shadow: 0 20px 60px rgba(0,0,0,0.5);
            max-width: 720px;
            width: 100%;
            padding: 40px;
        }

        h1 { font-size: 2em; margin-bottom: 8px; }
        .subtitle { color: #999; margin-bottom: 30px; font-size: 0.9em; }

        .upload-area {
            border: 3px dashed #ff6b35;
            border-radius: 15px;
            padding: 60px 20px;
            text-align: center;
            cursor: pointer;
            transition: all 0.2s;
            background: #1d1d26;
        }
        .upload-area:hover { background: #24242f; }
        .upload-area.dragging {
            border-color: #ffd166;
            background: #2a2a36;
            transform: scale(1.02);
        }
        .upload-icon { font-size: 3.5em; margin-bottom: 16px; }
        .upload-text { color: #ff6b35; font-size: 1.2em; font-weight: 600; margin-bottom: 8px; }
        .upload-hint { color: #888; font-size: 0.9em; }
        input[type="file"] { display: none; }

        .preview { display: none; text-align: center; }
        .preview img {
            max-width: 100%;
            max-height: 420px;
            border-radius: 10px;
            margin-bottom: 20px;
        }

        .actions { display: flex; gap: 12px; justify-content: center; }
        button {
            border: none;
            border-radius: 30px;
            padding: 12px 28px;
            font-size: 1em;
            font-weight: 700;
            cursor: pointer;
        }
        button:disabled { opacity: 0.5; cursor: not-allowed; }
        .roast-btn { background: #ff6b35; color: white; }
        .reset-btn { background: #2c2c38; color: #ddd; }

        .loading { display: none; text-align: center; padding: 30px; color: #bbb; }
        .spinner {
            border: 4px solid #333;
            border-top: 4px solid #ff6b35;
            border-radius: 50%;
            width: 46px;
            height: 46px;
            animation: spin 1s linear infinite;
            margin: 0 auto 16px;
        }
        @keyframes spin { to { transform: rotate(360deg); } }

        blockquote {
            display: none;
            margin-top: 24px;
            padding: 20px 24px;
            border-left: 5px solid #ff6b35;
            background: #1d1d26;
            border-radius: 0 10px 10px 0;
            font-size: 1.15em;
            font-style: italic;
            line-height: 1.6;
        }

        .error {
            display: none;
            margin-top: 20px;
            padding: 15px;
            border-radius: 10px;
            background: #3b1517;
            border: 2px solid #7a2a2e;
            color: #ff9c9c;
        }
    </style>
</head>
<body>
    <div class="container">
        <h1>AI Roaster 💀</h1>
        <p class="subtitle">Upload a photo. Get humbled.</p>

        <div class="upload-area" id="uploadArea">
            <div class="upload-icon">📸</div>
            <div class="upload-text">Click or drag an image here</div>
            <div class="upload-hint">JPG, PNG, WebP, GIF • Max 10MB</div>
            <input type="file" id="fileInput" accept="image/*">
        </div>

        <div class="preview" id="preview">
            <img id="previewImage" alt="Preview">
            <div class="actions">
                <button class="roast-btn" id="roastBtn">Roast it!</button>
                <button class="reset-btn" id="resetBtn">New upload</button>
            </div>
        </div>

        <div class="loading" id="loading">
            <div class="spinner"></div>
            <p>Cooking up a roast...</p>
        </div>

        <blockquote id="result"></blockquote>
        <div class="error" id="error"></div>
    </div>

    <script>
        const MAX_BYTES = 10 * 1024 * 1024;

        const uploadArea = document.getElementById('uploadArea');
        const fileInput = document.getElementById('fileInput');
        const preview = document.getElementById('preview');
        const previewImage = document.getElementById('previewImage');
        const roastBtn = document.getElementById('roastBtn');
        const resetBtn = document.getElementById('resetBtn');
        const loading = document.getElementById('loading');
        const result = document.getElementById('result');
        const errorBox = document.getElementById('error');

        // One of: idle, previewing, submitting, resultReady, errorReady.
        let state = { kind: 'idle' };

        function render() {
            const staged = state.image || null;
            const busy = state.kind === 'submitting';

            uploadArea.style.display = staged ? 'none' : 'block';
            preview.style.display = staged ? 'block' : 'none';
            if (staged) previewImage.src = staged;

            const roast = state.roast || null;
            roastBtn.style.display = roast ? 'none' : 'inline-block';
            roastBtn.disabled = busy;
            resetBtn.disabled = busy;

            loading.style.display = busy ? 'block' : 'none';

            result.style.display = roast && !busy ? 'block' : 'none';
            result.textContent = roast ? '"' + roast + '"' : '';

            errorBox.style.display = state.kind === 'errorReady' ? 'block' : 'none';
            errorBox.textContent = state.kind === 'errorReady' ? state.message : '';
        }

        function setState(next) {
            state = next;
            render();
        }

        function validate(file) {
            if (!file.type.startsWith('image/')) return 'only image files are allowed.';
            if (file.size > MAX_BYTES) return 'maximum file size is 10MB.';
            return null;
        }

        function readAsDataUrl(file) {
            return new Promise((resolve, reject) => {
                const reader = new FileReader();
                reader.onload = () => resolve(reader.result);
                reader.onerror = reject;
                reader.readAsDataURL(file);
            });
        }

        // Only the error changes; image and roast stay on screen.
        function rejectSelection(message) {
            setState({
                kind: 'errorReady',
                image: state.image || null,
                roast: state.roast || null,
                message
            });
        }

        async function selectFile(file) {
            if (state.kind === 'submitting') return;

            const problem = validate(file);
            if (problem) {
                rejectSelection(problem);
                return;
            }

            try {
                const image = await readAsDataUrl(file);
                setState({ kind: 'previewing', image });
            } catch (_) {
                rejectSelection('processing failed');
            }
        }

        async function submit() {
            if (!state.image || state.kind === 'submitting') return;

            const image = state.image;
            setState({ kind: 'submitting', image });

            try {
                const response = await fetch('/api/roast', {
                    method: 'POST',
                    headers: { 'Content-Type': 'application/json' },
                    body: JSON.stringify({ image })
                });
                const data = await response.json();
                if (!response.ok) throw new Error(data.error || 'failed to process image');
                setState({ kind: 'resultReady', image, roast: data.roasting });
            } catch (err) {
                setState({
                    kind: 'errorReady',
                    image,
                    message: err.message || 'an error occurred while processing the image'
                });
            }
        }

        function reset() {
            if (state.kind === 'submitting') return;
            fileInput.value = '';
            setState({ kind: 'idle' });
        }

        uploadArea.addEventListener('click', () => {
            if (state.kind !== 'submitting') fileInput.click();
        });

        ['dragenter', 'dragover'].forEach((name) => {
            uploadArea.addEventListener(name, (e) => {
                e.preventDefault();
                uploadArea.classList.add('dragging');
            });
        });

        uploadArea.addEventListener('dragleave', (e) => {
            e.preventDefault();
            uploadArea.classList.remove('dragging');
        });

        uploadArea.addEventListener('drop', (e) => {
            e.preventDefault();
            uploadArea.classList.remove('dragging');
            const file = e.dataTransfer.files[0];
            if (file) selectFile(file);
        });

        fileInput.addEventListener('change', (e) => {
            const file = e.target.files[0];
            if (file) selectFile(file);
        });

        roastBtn.addEventListener('click', submit);
        resetBtn.addEventListener('click', reset);

        render();
    </script>
</body>
</html>
"#;
