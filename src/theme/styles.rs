//! Global CSS styles for Folio.
//!
//! A light, neutral palette with a single indigo accent.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  /* Surfaces */
  --background: #ffffff;
  --foreground: #0a0a0a;
  --muted: #f4f4f5;
  --muted-foreground: #71717a;
  --border: #e4e4e7;

  /* Accent (mirrored in theme::colors) */
  --accent: rgb(79, 70, 229);
  --accent-soft: rgba(79, 70, 229, 0.2);

  /* Typography */
  --font-sans: 'Inter', system-ui, -apple-system, 'Segoe UI', sans-serif;

  /* Radii */
  --radius: 0.5rem;
  --radius-full: 9999px;

  /* Transitions */
  --transition-fast: 150ms ease;
  --transition-normal: 300ms ease;
}

/* === Global Reset === */
*, *::before, *::after {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

html {
  font-size: 16px;
  -webkit-font-smoothing: antialiased;
}

body {
  font-family: var(--font-sans);
  background: var(--background);
  color: var(--foreground);
  line-height: 1.6;
  min-height: 100vh;
}

a {
  color: inherit;
}

/* === Layout === */
.home {
  display: flex;
  flex-direction: column;
  gap: 2.5rem;
  min-height: 100vh;
  padding: 2rem 1rem;
}

.section {
  position: relative;
  width: 100%;
  max-width: 48rem;
  margin: 0 auto;
  display: flex;
  flex-direction: column;
  gap: 1rem;
}

.section--wide {
  max-width: 64rem;
  padding: 3rem 0;
}

.section--hero {
  overflow: hidden;
  padding: 2rem 0;
}

.section__title {
  font-size: 1.5rem;
  font-weight: 600;
}

/* === Accent Text === */
.aurora-text {
  background-image: linear-gradient(
    135deg,
    #ff0080 0%,
    #7928ca 25%,
    var(--accent) 50%,
    #0070f3 75%,
    #ff0080 100%
  );
  background-size: 200% auto;
  -webkit-background-clip: text;
  background-clip: text;
  -webkit-text-fill-color: transparent;
  animation-name: aurora-drift;
  animation-timing-function: linear;
  animation-iteration-count: infinite;
}

@keyframes aurora-drift {
  0% { background-position: 0% 50%; }
  100% { background-position: 200% 50%; }
}

.sparkles-text {
  position: relative;
  display: inline-block;
}

.sparkles-text__content {
  position: relative;
  z-index: 1;
}

.sparkles-text__star {
  position: absolute;
  pointer-events: none;
  font-size: 0.6em;
  line-height: 1;
  color: #9e7aff;
  opacity: 0;
  transform: translate(-50%, -50%) scale(0);
  animation: sparkle-twinkle 1.6s ease-in-out infinite;
}

@keyframes sparkle-twinkle {
  0%, 100% { opacity: 0; transform: translate(-50%, -50%) scale(0) rotate(0deg); }
  50% { opacity: 1; transform: translate(-50%, -50%) scale(var(--sparkle-scale, 1)) rotate(75deg); }
}

.section__intro {
  display: flex;
  flex-direction: column;
  align-items: center;
  gap: 0.5rem;
  text-align: center;
}

.section__eyebrow {
  display: inline-block;
  border-radius: var(--radius);
  background: var(--foreground);
  color: var(--background);
  padding: 0.25rem 0.75rem;
  font-size: 0.875rem;
}

/* === Hero === */
.hero {
  position: relative;
  display: flex;
  justify-content: space-between;
  align-items: flex-start;
  gap: 0.5rem;
}

.hero__text {
  display: flex;
  flex-direction: column;
  flex: 1;
  gap: 0.375rem;
}

.hero__greeting {
  font-size: 3rem;
  font-weight: 700;
  letter-spacing: -0.04em;
  line-height: 1;
}

.hero__description {
  max-width: 600px;
  font-size: 1.25rem;
}

.avatar {
  width: 7rem;
  height: 7rem;
  border-radius: var(--radius-full);
  border: 1px solid var(--border);
  overflow: hidden;
  display: flex;
  align-items: center;
  justify-content: center;
  background: var(--muted);
}

.avatar__img {
  width: 100%;
  height: 100%;
  object-fit: cover;
}

.avatar__fallback {
  font-size: 2rem;
  font-weight: 600;
}

/* === Prose === */
.prose {
  color: var(--muted-foreground);
  max-width: 100%;
}

.prose p + p,
.prose ul,
.prose ol {
  margin-top: 0.75rem;
}

.prose ul,
.prose ol {
  padding-left: 1.25rem;
}

.prose strong {
  color: var(--foreground);
}

/* === Blur Fade === */
@keyframes blur-fade {
  from {
    opacity: 0;
    filter: blur(var(--blur-fade-blur, 6px));
    transform: translateY(var(--blur-fade-y, 6px));
  }
  to {
    opacity: 1;
    filter: blur(0);
    transform: translateY(0);
  }
}

/* === Skeleton === */
@keyframes skeleton-pulse {
  50% { opacity: 0.5; }
}

.skeleton {
  background: var(--muted);
  animation: skeleton-pulse 2s cubic-bezier(0.4, 0, 0.6, 1) infinite;
}

.skeleton--block {
  border-radius: var(--radius);
}

.skeleton--pill {
  border-radius: var(--radius-full);
}

/* === Badge === */
.badge-list {
  display: flex;
  flex-wrap: wrap;
  gap: 0.25rem;
}

.badge {
  display: inline-flex;
  align-items: center;
  border-radius: var(--radius);
  background: var(--foreground);
  color: var(--background);
  padding: 0.125rem 0.5rem;
  font-size: 0.75rem;
  font-weight: 600;
}

/* === Buttons === */
.btn {
  display: inline-flex;
  align-items: center;
  justify-content: center;
  gap: 0.5rem;
  border-radius: var(--radius);
  border: 1px solid transparent;
  padding: 0.5rem 1rem;
  font-size: 0.875rem;
  font-weight: 500;
  text-decoration: none;
  cursor: pointer;
  transition: background var(--transition-fast), border-color var(--transition-fast);
}

.btn:disabled {
  opacity: 0.5;
  cursor: not-allowed;
}

.btn--primary {
  background: var(--foreground);
  color: var(--background);
}

.btn--outline {
  background: var(--background);
  border-color: var(--border);
  color: var(--foreground);
}

.btn--outline:hover,
.btn--ghost:hover {
  background: var(--muted);
}

.btn--ghost {
  background: transparent;
  color: var(--foreground);
}

.wide {
  width: 100%;
}

/* === Resume Card === */
.resume-card {
  display: flex;
  gap: 1rem;
  cursor: pointer;
}

.resume-card__logo {
  flex: none;
  width: 3rem;
  height: 3rem;
  border-radius: var(--radius-full);
  border: 1px solid var(--border);
  background: var(--muted);
  display: flex;
  align-items: center;
  justify-content: center;
  overflow: hidden;
  font-weight: 600;
}

.resume-card__logo img {
  width: 100%;
  height: 100%;
  object-fit: contain;
}

.resume-card__body {
  flex: 1;
  display: flex;
  flex-direction: column;
  gap: 0.25rem;
}

.resume-card__header {
  display: flex;
  justify-content: space-between;
  align-items: baseline;
  gap: 0.5rem;
}

.resume-card__title {
  font-size: 1rem;
  font-weight: 600;
}

.resume-card__period,
.resume-card__subtitle,
.resume-card__description {
  font-size: 0.875rem;
  color: var(--muted-foreground);
}

/* === Gauges === */
.gauge-grid {
  display: grid;
  grid-template-columns: repeat(3, minmax(0, 1fr));
  gap: 1rem;
  margin-top: 1rem;
}

.gauge {
  position: relative;
  display: flex;
  flex-direction: column;
  align-items: center;
}

.gauge__ring {
  width: 8rem;
  height: 8rem;
}

.gauge__value {
  transition: stroke-dasharray 1s ease;
}

.gauge__percent {
  position: absolute;
  top: 4rem;
  transform: translateY(-50%);
  font-size: 1.5rem;
  font-weight: 600;
}

.gauge__label {
  margin-top: 0.5rem;
  font-size: 0.875rem;
  font-weight: 500;
}

/* === Animated Grid Pattern === */
@keyframes grid-square-fade {
  from { opacity: 0; }
  to { opacity: var(--square-opacity, 0.5); }
}

.grid-pattern {
  pointer-events: none;
  position: absolute;
  inset: 0;
  width: 100%;
  height: 100%;
  fill: rgba(156, 163, 175, 0.3);
  stroke: rgba(156, 163, 175, 0.3);
  color: var(--muted-foreground);
  -webkit-mask-image: radial-gradient(500px circle at center, white, transparent);
  mask-image: radial-gradient(500px circle at center, white, transparent);
}

.grid-pattern__square {
  opacity: 0;
  animation-name: grid-square-fade;
  animation-timing-function: ease-in-out;
  animation-iteration-count: 2;
  animation-direction: alternate;
}

/* === Project Cards === */
.project-grid {
  display: grid;
  grid-template-columns: repeat(2, minmax(0, 1fr));
  gap: 1rem;
}

.project-card {
  height: 100%;
  display: flex;
  flex-direction: column;
  gap: 0.5rem;
  border: 1px solid var(--border);
  border-radius: var(--radius);
  padding: 1rem;
  cursor: pointer;
  transition: box-shadow var(--transition-normal);
}

.project-card:hover {
  box-shadow: 0 4px 12px rgba(0, 0, 0, 0.08);
}

.project-card__skeleton {
  display: flex;
  flex-direction: column;
  gap: 0.5rem;
}

.project-card__preview {
  height: 125px;
  overflow: hidden;
  border-radius: var(--radius);
}

.project-card__preview .gallery-image__img {
  height: 125px;
  object-fit: cover;
}

.project-card__title {
  font-weight: 600;
}

.project-card__description {
  flex: 1;
  font-size: 0.875rem;
  color: var(--muted-foreground);
}

/* === Drawer === */
.drawer-backdrop {
  position: fixed;
  inset: 0;
  z-index: 50;
  display: flex;
  align-items: flex-end;
  background: rgba(0, 0, 0, 0.8);
}

.drawer {
  width: 100%;
  max-height: 90vh;
  display: flex;
  flex-direction: column;
  border-top-left-radius: 10px;
  border-top-right-radius: 10px;
  background: var(--background);
}

.drawer__header {
  padding: 1rem;
  text-align: center;
}

.drawer__title {
  font-size: 1.125rem;
  font-weight: 600;
}

.drawer__description {
  font-size: 0.875rem;
  color: var(--muted-foreground);
}

.drawer__body {
  padding: 0 1rem;
  overflow-y: auto;
}

.drawer__skeletons,
.drawer__images {
  display: flex;
  flex-direction: column;
  gap: 1rem;
}

.drawer__images--hidden {
  display: none;
}

.drawer__footer {
  display: flex;
  flex-direction: column;
  gap: 0.5rem;
  padding: 1rem;
}

.gallery-image {
  width: 100%;
  max-height: 400px;
  aspect-ratio: 4 / 3;
}

.gallery-image__img {
  width: 100%;
  height: 100%;
  object-fit: contain;
  border-radius: var(--radius);
}

/* === Contact === */
.contact-links {
  display: flex;
  flex-wrap: wrap;
  justify-content: center;
  gap: 0.75rem;
}

/* === Responsive === */
@media (max-width: 640px) {
  .project-grid {
    grid-template-columns: 1fr;
  }

  .gauge-grid {
    grid-template-columns: repeat(2, minmax(0, 1fr));
  }

  .hero__greeting {
    font-size: 1.875rem;
  }
}
"#;
