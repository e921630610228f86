pub const STYLES: &str = r#"
:root {
    /* Colors */
    --bg-primary: #f9fafb;
    --bg-secondary: #ffffff;
    --text-primary: #1f2937;
    --text-secondary: #6b7280;
    --text-muted: #9ca3af;
    --accent-bg: #4f46e5;
    --accent-bg-hover: #4338ca;
    --accent-soft: #eef2ff;
    --accent-text: #ffffff;
    --magic: #a855f7;
    --border-color: #e5e7eb;
    --hover-bg: #f3f4f6;
    --danger-text: #dc2626;
    --success-text: #16a34a;

    /* Badges */
    --badge-review-bg: #dbeafe;
    --badge-review-text: #1e40af;
    --badge-processing-bg: #fef9c3;
    --badge-processing-text: #854d0e;
    --badge-exported-bg: #dcfce7;
    --badge-exported-text: #166534;

    /* Spacing & Radius */
    --radius-md: 8px;
    --radius-full: 9999px;

    /* Shadows */
    --shadow-md: 0 4px 6px rgba(0, 0, 0, 0.08);
    --shadow-lg: 0 10px 25px rgba(0, 0, 0, 0.1);
}

* {
    box-sizing: border-box;
}

body {
    margin: 0;
    padding: 0;
    font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;
    background: var(--bg-primary);
    color: var(--text-primary);
}

.sr-only {
    position: absolute;
    width: 1px;
    height: 1px;
    overflow: hidden;
    clip: rect(0, 0, 0, 0);
    white-space: nowrap;
}

.w-full {
    width: 100%;
}

.btn {
    padding: 0.5rem 1rem;
    border-radius: var(--radius-md);
    border: none;
    font-weight: 600;
    display: inline-flex;
    align-items: center;
    justify-content: center;
    gap: 0.5rem;
    cursor: pointer;
    transition: all 0.2s;
}

.btn:disabled {
    opacity: 0.5;
    cursor: not-allowed;
}

.btn-primary {
    background: var(--accent-bg);
    color: var(--accent-text);
}

.btn-primary:hover:not(:disabled) {
    background: var(--accent-bg-hover);
}

.btn-secondary {
    background: #e5e7eb;
    color: var(--text-primary);
}

.btn-secondary:hover:not(:disabled) {
    background: #d1d5db;
}

.link-button {
    background: none;
    border: none;
    color: var(--accent-bg);
    font-weight: 500;
    cursor: pointer;
}

.card {
    background: var(--bg-secondary);
    border: 1px solid var(--border-color);
    border-radius: var(--radius-md);
    box-shadow: var(--shadow-md);
}

.input {
    display: block;
    width: 100%;
    padding: 0.5rem 0.75rem;
    border: 1px solid #d1d5db;
    border-radius: 6px;
    font-size: 0.875rem;
    color: var(--text-primary);
}

.input:focus {
    outline: none;
    border-color: var(--accent-bg);
}

.error-text {
    margin: 0;
    font-size: 0.875rem;
    color: var(--danger-text);
}

.auth-page {
    min-height: 100vh;
    display: flex;
    align-items: center;
    justify-content: center;
    background: #f3f4f6;
}

.auth-card {
    width: 100%;
    max-width: 28rem;
    padding: 2rem;
    display: flex;
    flex-direction: column;
    gap: 1.5rem;
}

.auth-title {
    margin: 0;
    text-align: center;
    font-size: 1.875rem;
    font-weight: 800;
}

.auth-form {
    display: flex;
    flex-direction: column;
    gap: 1.5rem;
}

.main-app {
    min-height: 100vh;
    background: var(--bg-primary);
}

.page {
    padding: 2rem;
}

.page-narrow {
    max-width: 42rem;
    margin: 3rem auto 0;
    text-align: center;
}

.entry-card {
    padding: 1.5rem;
    cursor: pointer;
    display: flex;
    flex-direction: column;
    align-items: center;
    text-align: center;
    transition: box-shadow 0.2s;
}

.entry-card:hover {
    box-shadow: var(--shadow-lg);
}

.project-row {
    padding: 1rem;
    display: flex;
    justify-content: space-between;
    align-items: center;
    cursor: pointer;
    border-bottom: 1px solid var(--border-color);
}

.project-row:last-child {
    border-bottom: none;
}

.project-row:hover {
    background: var(--hover-bg);
}

.badge {
    padding: 0.25rem 0.75rem;
    font-size: 0.875rem;
    font-weight: 500;
    border-radius: var(--radius-full);
}

.clip-item {
    padding: 0.75rem;
    border-radius: 6px;
    cursor: pointer;
    border: 2px solid transparent;
}

.clip-item:hover {
    background: var(--hover-bg);
}

.clip-item.selected {
    border-color: var(--accent-bg);
    background: var(--accent-soft);
}

.field-label {
    display: block;
    margin-bottom: 0.5rem;
    font-size: 0.875rem;
    font-weight: 500;
    color: #374151;
}

.drop-zone {
    padding: 3rem;
    border: 2px dashed #d1d5db;
    border-radius: var(--radius-md);
    display: flex;
    flex-direction: column;
    align-items: center;
    justify-content: center;
}

.download-row {
    padding: 0.75rem;
    display: flex;
    justify-content: space-between;
    align-items: center;
    background: var(--bg-primary);
    border-radius: 6px;
}

.truncate {
    overflow: hidden;
    text-overflow: ellipsis;
    white-space: nowrap;
}

@media (max-width: 640px) {
    .hide-mobile {
        display: none !important;
    }
}
"#;
