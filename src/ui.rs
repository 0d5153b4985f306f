pub fn render_index(month_label: &str) -> String {
    INDEX_HTML.replace("{{MONTH_LABEL}}", month_label)
}

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>Date Poll</title>
  <style>
    @import url('https://fonts.googleapis.com/css2?family=Space+Grotesk:wght@400;500;600&family=Fraunces:wght@600&display=swap');

    :root {
      --bg-1: #f8f3e6;
      --bg-2: #f5d3a7;
      --ink: #2b2a28;
      --accent: #ff6b4a;
      --accent-2: #2f4858;
      --card: rgba(255, 255, 255, 0.86);
      --shadow: 0 24px 60px rgba(47, 72, 88, 0.18);
      --green: #bff0c8;
      --yellow: #fbe7a2;
      --red: #f8c0b6;
    }

    * {
      box-sizing: border-box;
    }

    body {
      margin: 0;
      min-height: 100vh;
      background: radial-gradient(circle at top, var(--bg-2), transparent 60%),
        linear-gradient(135deg, var(--bg-1), #ffe9d4 60%, #f9f2e9 100%);
      color: var(--ink);
      font-family: "Space Grotesk", "Trebuchet MS", sans-serif;
      display: grid;
      place-items: center;
      padding: 32px 18px 48px;
    }

    .app {
      width: min(720px, 100%);
      background: var(--card);
      backdrop-filter: blur(12px);
      border-radius: 28px;
      box-shadow: var(--shadow);
      padding: 36px;
      display: grid;
      gap: 24px;
      animation: rise 600ms ease;
    }

    header {
      display: flex;
      flex-direction: column;
      gap: 6px;
    }

    h1 {
      font-family: "Fraunces", "Georgia", serif;
      font-weight: 600;
      font-size: clamp(2rem, 4vw, 2.6rem);
      margin: 0;
    }

    .subtitle {
      margin: 0;
      color: #5f5c57;
      font-size: 1rem;
    }

    .month-bar {
      display: flex;
      align-items: center;
      justify-content: space-between;
      gap: 12px;
    }

    .month-bar h2 {
      margin: 0;
      font-size: 1.4rem;
    }

    .nav-btn {
      width: 44px;
      height: 44px;
      font-size: 1.1rem;
      background: white;
      color: var(--accent-2);
      border: 1px solid rgba(47, 72, 88, 0.14);
      box-shadow: none;
    }

    .weekdays,
    .grid {
      display: grid;
      grid-template-columns: repeat(7, 1fr);
      gap: 6px;
    }

    .weekdays div {
      text-align: center;
      font-size: 0.82rem;
      text-transform: uppercase;
      letter-spacing: 0.08em;
      color: #8b857d;
      padding-bottom: 4px;
    }

    .day {
      height: 46px;
      border: none;
      border-radius: 12px;
      background: white;
      font: inherit;
      font-size: 0.95rem;
      color: var(--ink);
      cursor: pointer;
      transition: transform 120ms ease, box-shadow 120ms ease;
    }

    .day:hover {
      transform: translateY(-1px);
      box-shadow: 0 8px 18px rgba(47, 72, 88, 0.14);
    }

    .day.blank {
      background: transparent;
      box-shadow: none;
      cursor: default;
    }

    .day.green { background: var(--green); }
    .day.yellow { background: var(--yellow); }
    .day.red { background: var(--red); }

    .day.today {
      outline: 2px solid var(--accent);
      outline-offset: 2px;
    }

    .day.selected {
      box-shadow: 0 0 0 2px var(--accent-2) inset;
    }

    .controls {
      display: flex;
      flex-wrap: wrap;
      align-items: center;
      gap: 12px;
    }

    button {
      appearance: none;
      border: none;
      border-radius: 999px;
      padding: 12px 18px;
      font-size: 0.95rem;
      font-weight: 600;
      cursor: pointer;
      transition: transform 150ms ease, box-shadow 150ms ease;
      display: inline-flex;
      align-items: center;
      justify-content: center;
    }

    button:active {
      transform: scale(0.98);
    }

    .btn-mode {
      background: var(--accent-2);
      color: white;
      box-shadow: 0 10px 24px rgba(47, 72, 88, 0.3);
    }

    .palette {
      display: none;
      gap: 8px;
      padding: 6px;
      background: rgba(47, 72, 88, 0.08);
      border-radius: 999px;
    }

    .palette.open {
      display: flex;
    }

    .choice {
      background: white;
      color: #6b645d;
      box-shadow: none;
      padding: 10px 16px;
    }

    .choice.active[data-choice="yes"] { background: var(--green); color: var(--ink); }
    .choice.active[data-choice="if-need-be"] { background: var(--yellow); color: var(--ink); }
    .choice.active[data-choice="no"] { background: var(--red); color: var(--ink); }

    .voter {
      margin-left: auto;
      display: flex;
      align-items: center;
      gap: 8px;
      font-size: 0.9rem;
      color: #6b645d;
    }

    .voter input {
      font: inherit;
      padding: 10px 14px;
      border-radius: 999px;
      border: 1px solid rgba(47, 72, 88, 0.18);
      background: white;
      width: 150px;
    }

    .detail {
      display: none;
      background: white;
      border-radius: 20px;
      padding: 20px;
      border: 1px solid rgba(47, 72, 88, 0.08);
    }

    .detail.open {
      display: block;
    }

    .detail h3 {
      margin: 0 0 12px;
      font-size: 1.1rem;
    }

    .detail .columns {
      display: grid;
      grid-template-columns: repeat(3, 1fr);
      gap: 16px;
    }

    .detail h4 {
      margin: 0 0 8px;
      font-size: 0.95rem;
    }

    .detail ul {
      margin: 0;
      padding: 0;
      list-style: none;
      display: grid;
      gap: 4px;
      font-size: 0.9rem;
      overflow-wrap: anywhere;
    }

    .detail .yes h4 { color: #2d7a4b; }
    .detail .if-need-be h4 { color: #a07d14; }
    .detail .no h4 { color: #c63b2b; }

    .status {
      font-size: 0.95rem;
      color: #6b645d;
      min-height: 1.2em;
    }

    .status[data-type="error"] {
      color: #c63b2b;
    }

    .hint {
      margin: 0;
      color: #6f6a65;
      font-size: 0.9rem;
    }

    @keyframes rise {
      from {
        opacity: 0;
        transform: translateY(18px);
      }
      to {
        opacity: 1;
        transform: translateY(0);
      }
    }

    @media (max-width: 560px) {
      .app {
        padding: 28px 22px;
      }
      .voter {
        margin-left: 0;
      }
      .detail .columns {
        grid-template-columns: 1fr;
      }
    }
  </style>
</head>
<body>
  <main class="app">
    <header>
      <h1>Date Poll</h1>
      <p class="subtitle">Click a date to see votes, or enter vote mode to cast yours.</p>
    </header>

    <section class="month-bar">
      <button class="nav-btn" id="prev-month" type="button" aria-label="Previous month">&lt;</button>
      <h2 id="month-label">{{MONTH_LABEL}}</h2>
      <button class="nav-btn" id="next-month" type="button" aria-label="Next month">&gt;</button>
    </section>

    <section>
      <div class="weekdays">
        <div>Sun</div><div>Mon</div><div>Tue</div><div>Wed</div><div>Thu</div><div>Fri</div><div>Sat</div>
      </div>
      <div class="grid" id="grid"></div>
    </section>

    <section class="controls">
      <button class="btn-mode" id="mode-btn" type="button">Enter Vote Mode</button>
      <div class="palette" id="palette">
        <button class="choice" type="button" data-choice="yes">Yes</button>
        <button class="choice" type="button" data-choice="if-need-be">If Need Be</button>
        <button class="choice" type="button" data-choice="no">No</button>
      </div>
      <label class="voter">Voting as
        <input id="voter" type="text" value="CurrentUser" />
      </label>
    </section>

    <section class="detail" id="detail">
      <h3 id="detail-date"></h3>
      <div class="columns">
        <div class="yes">
          <h4 id="yes-heading">Yes (0)</h4>
          <ul id="yes-list"></ul>
        </div>
        <div class="if-need-be">
          <h4 id="ifneedbe-heading">If Need Be (0)</h4>
          <ul id="ifneedbe-list"></ul>
        </div>
        <div class="no">
          <h4 id="no-heading">No (0)</h4>
          <ul id="no-list"></ul>
        </div>
      </div>
    </section>

    <div class="status" id="status"></div>
    <p class="hint">Red means someone said no, yellow means someone said if need be, green means everyone said yes.</p>
  </main>

  <script>
    const monthLabelEl = document.getElementById('month-label');
    const gridEl = document.getElementById('grid');
    const modeBtn = document.getElementById('mode-btn');
    const paletteEl = document.getElementById('palette');
    const choiceBtns = Array.from(paletteEl.querySelectorAll('.choice'));
    const voterEl = document.getElementById('voter');
    const detailEl = document.getElementById('detail');
    const detailDateEl = document.getElementById('detail-date');
    const statusEl = document.getElementById('status');

    const setStatus = (message, type) => {
      statusEl.textContent = message;
      statusEl.dataset.type = type || '';
    };

    const request = async (path, options) => {
      const res = await fetch(path, options);
      if (!res.ok) {
        const msg = await res.text();
        throw new Error(msg || 'Request failed');
      }
      return res.json();
    };

    const post = (path, body) =>
      request(path, {
        method: 'POST',
        headers: { 'content-type': 'application/json' },
        body: JSON.stringify(body || {})
      });

    const renderGrid = (calendar) => {
      gridEl.innerHTML = '';
      calendar.cells.forEach((cell) => {
        const el = document.createElement('button');
        el.type = 'button';
        el.className = 'day';
        if (cell.day === null) {
          el.classList.add('blank');
          el.disabled = true;
        } else {
          el.textContent = cell.day;
          if (cell.category !== 'empty') {
            el.classList.add(cell.category);
          }
          if (cell.date === calendar.today) {
            el.classList.add('today');
          }
          if (cell.date === calendar.selection.selected_date) {
            el.classList.add('selected');
          }
          el.addEventListener('click', () => {
            clickDay(cell.date).catch((err) => setStatus(err.message, 'error'));
          });
        }
        gridEl.appendChild(el);
      });
    };

    const renderDetail = (detail) => {
      const fill = (listId, headingId, label, names) => {
        const list = document.getElementById(listId);
        list.innerHTML = '';
        names.forEach((name) => {
          const item = document.createElement('li');
          item.textContent = name;
          list.appendChild(item);
        });
        document.getElementById(headingId).textContent = `${label} (${names.length})`;
      };
      detailDateEl.textContent = detail.date;
      fill('yes-list', 'yes-heading', 'Yes', detail.yes);
      fill('ifneedbe-list', 'ifneedbe-heading', 'If Need Be', detail.if_need_be);
      fill('no-list', 'no-heading', 'No', detail.no);
    };

    const render = async (calendar) => {
      monthLabelEl.textContent = calendar.label;
      renderGrid(calendar);

      const voting = calendar.selection.vote_mode_active;
      modeBtn.textContent = voting ? 'Exit Vote Mode' : 'Enter Vote Mode';
      paletteEl.classList.toggle('open', voting);
      choiceBtns.forEach((btn) => {
        btn.classList.toggle(
          'active',
          btn.dataset.choice === calendar.selection.active_vote_choice
        );
      });

      const selected = calendar.selection.selected_date;
      if (selected) {
        renderDetail(await request(`/api/day/${selected}`));
        detailEl.classList.add('open');
      } else {
        detailEl.classList.remove('open');
      }
    };

    const clickDay = async (date) => {
      const voter = voterEl.value.trim() || 'CurrentUser';
      await render(await post('/api/day/click', { date, voter }));
    };

    modeBtn.addEventListener('click', () => {
      post('/api/vote-mode/toggle')
        .then(render)
        .catch((err) => setStatus(err.message, 'error'));
    });

    choiceBtns.forEach((btn) => {
      btn.addEventListener('click', () => {
        post('/api/vote-mode/choice', { response: btn.dataset.choice })
          .then(render)
          .catch((err) => setStatus(err.message, 'error'));
      });
    });

    document.getElementById('prev-month').addEventListener('click', () => {
      post('/api/calendar/step', { delta: -1 })
        .then(render)
        .catch((err) => setStatus(err.message, 'error'));
    });

    document.getElementById('next-month').addEventListener('click', () => {
      post('/api/calendar/step', { delta: 1 })
        .then(render)
        .catch((err) => setStatus(err.message, 'error'));
    });

    request('/api/calendar')
      .then(render)
      .catch((err) => setStatus(err.message, 'error'));
  </script>
</body>
</html>
"#;
