pub fn render_index(date: &str, streak: u32) -> String {
    INDEX_HTML
        .replace("{{DATE}}", date)
        .replace("{{STREAK}}", &streak.to_string())
}

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>Your Journey to Success</title>
  <style>
    :root {
      --bg-1: #1a1a1a;
      --bg-2: #2d2d2d;
      --accent: #FF8C69;
      --accent-2: #FF6B6B;
      --soft: #FFA07A;
      --card: rgba(255, 255, 255, 0.1);
      --border: 1px solid rgba(255, 140, 105, 0.2);
    }

    * {
      box-sizing: border-box;
    }

    body {
      margin: 0;
      min-height: 100vh;
      background: radial-gradient(circle at top right, rgba(255, 140, 105, 0.1), transparent 70%),
        radial-gradient(circle at bottom left, rgba(255, 107, 107, 0.1), transparent 70%),
        linear-gradient(135deg, var(--bg-1) 0%, var(--bg-2) 100%);
      color: white;
      font-family: "Segoe UI", "Helvetica Neue", sans-serif;
      padding: 1rem;
      display: flex;
      flex-direction: column;
      gap: 1.5rem;
    }

    header {
      text-align: center;
      padding: 1rem;
      background: rgba(255, 255, 255, 0.05);
      border-radius: 15px;
      border: var(--border);
    }

    header h1 {
      font-size: 2.2rem;
      color: var(--accent);
      text-shadow: 2px 2px 4px rgba(0, 0, 0, 0.3);
      margin: 0 0 0.5rem;
    }

    header p {
      color: var(--soft);
      margin: 0;
      opacity: 0.8;
    }

    .streak-card {
      background: linear-gradient(135deg, rgba(255, 140, 105, 0.2), rgba(255, 107, 107, 0.2));
      padding: 1rem;
      border-radius: 15px;
      text-align: center;
      border: 1px solid rgba(255, 140, 105, 0.3);
    }

    .streak-card h3 {
      font-size: 1.5rem;
      color: var(--accent);
      margin: 0 0 0.5rem;
    }

    .streak-card p {
      color: var(--soft);
      font-size: 0.9rem;
      margin: 0;
    }

    .quote-card {
      background: var(--card);
      padding: 2rem;
      border-radius: 15px;
      margin: 0 auto;
      width: min(800px, 100%);
      text-align: center;
      box-shadow: 0 8px 32px rgba(0, 0, 0, 0.3);
      border: var(--border);
    }

    .quote-text {
      font-size: 1.5rem;
      line-height: 1.6;
      font-style: italic;
      margin: 0 0 1rem;
    }

    .quote-author {
      color: var(--soft);
      font-style: italic;
      text-align: right;
      margin: 0;
    }

    .tip-card {
      background: var(--card);
      padding: 1.2rem;
      border-radius: 15px;
      border: var(--border);
    }

    .tip-card h3 {
      color: var(--accent);
      margin: 0 0 0.5rem;
      font-size: 1.1rem;
    }

    .tip-card p {
      color: var(--soft);
      font-size: 0.9rem;
      line-height: 1.4;
      margin: 0;
    }

    button {
      border: none;
      cursor: pointer;
      color: white;
      font-size: 1rem;
      transition: transform 150ms ease;
    }

    button:active {
      transform: scale(0.96);
    }

    .btn-gradient {
      background: linear-gradient(45deg, var(--accent), var(--accent-2));
      padding: 0.8rem 1.6rem;
      border-radius: 25px;
      font-weight: 500;
      box-shadow: 0 4px 15px rgba(255, 107, 107, 0.3);
    }

    .btn-quote {
      margin-top: 1.5rem;
    }

    .btn-tasks {
      display: block;
      margin: 0 auto;
      font-size: 1.1rem;
    }

    .progress-section {
      background: rgba(255, 255, 255, 0.05);
      padding: 1.5rem 1rem;
      border-radius: 15px;
      border: var(--border);
    }

    .progress-section h2 {
      text-align: center;
      color: var(--accent);
      margin: 0 0 0.3rem;
    }

    .progress-section .hint {
      text-align: center;
      color: var(--soft);
      font-size: 0.9rem;
      margin: 0 0 1.5rem;
      opacity: 0.8;
    }

    .goal-grid {
      display: grid;
      grid-template-columns: repeat(auto-fit, minmax(250px, 1fr));
      gap: 1.5rem;
    }

    .goal-card {
      background: var(--card);
      padding: 1.2rem;
      border-radius: 15px;
      border: var(--border);
    }

    .goal-card h3 {
      margin: 0 0 1rem;
      font-size: 1.4rem;
    }

    .goal-label {
      display: block;
      text-align: right;
      font-size: 0.9rem;
      margin-bottom: 0.3rem;
    }

    .bar {
      width: 100%;
      height: 12px;
      background: rgba(255, 255, 255, 0.1);
      border-radius: 6px;
      overflow: hidden;
    }

    .bar-fill {
      height: 100%;
      border-radius: 6px;
      transition: width 0.3s ease;
    }

    .goal-controls {
      display: flex;
      justify-content: space-between;
      margin-top: 1rem;
    }

    .btn-step {
      background: linear-gradient(45deg, var(--accent), var(--accent-2));
      border-radius: 50%;
      width: 35px;
      height: 35px;
      font-weight: bold;
      font-size: 1.2rem;
      display: flex;
      align-items: center;
      justify-content: center;
    }

    .modal-backdrop {
      position: fixed;
      inset: 0;
      background: rgba(0, 0, 0, 0.8);
      display: none;
      justify-content: center;
      align-items: center;
      z-index: 1000;
    }

    .modal-backdrop.open {
      display: flex;
    }

    .modal {
      background: var(--bg-2);
      padding: 2rem;
      border-radius: 15px;
      width: 90%;
      max-width: 600px;
      max-height: 80vh;
      overflow-y: auto;
    }

    .modal-header {
      display: flex;
      justify-content: space-between;
      align-items: center;
      margin-bottom: 1rem;
    }

    .modal-header h2 {
      color: var(--accent);
      margin: 0;
    }

    .btn-close {
      background: none;
      color: var(--soft);
      font-size: 1.4rem;
    }

    .task-input {
      display: flex;
      gap: 0.8rem;
      margin-bottom: 1rem;
    }

    .task-input input,
    .task-input select {
      padding: 0.5rem;
      border: var(--border);
      border-radius: 5px;
      background: rgba(255, 255, 255, 0.1);
      color: white;
      font-size: 1rem;
    }

    .task-input input {
      flex: 1;
    }

    .btn-add {
      background: linear-gradient(45deg, var(--accent), var(--accent-2));
      padding: 0.5rem 1rem;
      border-radius: 5px;
    }

    .task-list {
      display: flex;
      flex-direction: column;
      gap: 0.5rem;
    }

    .task-item {
      display: flex;
      align-items: center;
      gap: 0.5rem;
      padding: 0.5rem;
      border-radius: 5px;
      background: rgba(255, 255, 255, 0.1);
    }

    .task-item .text {
      flex: 1;
    }

    .task-item.done .text {
      text-decoration: line-through;
      color: var(--soft);
    }

    .task-item .category {
      color: var(--soft);
      font-size: 0.9rem;
    }

    .btn-plain {
      background: none;
      color: var(--soft);
      font-size: 1.1rem;
      padding: 0 0.3rem;
    }
  </style>
</head>
<body>
  <header>
    <h1>Your Journey to Success</h1>
    <p>Track your progress, celebrate your wins</p>
  </header>

  <section class="streak-card">
    <h3>&#128293; <span id="streak">{{STREAK}}</span> Day Streak!</h3>
    <p>Keep going, you're doing amazing! (<span id="date">{{DATE}}</span>)</p>
  </section>

  <section class="quote-card">
    <p class="quote-text" id="quote-text">Loading inspiration...</p>
    <p class="quote-author" id="quote-author"></p>
    <button class="btn-gradient btn-quote" id="new-quote" type="button">New Quote &#10024;</button>
  </section>

  <section class="tip-card">
    <h3>&#128171; Daily Self-Care Tip</h3>
    <p id="tip-text"></p>
  </section>

  <button class="btn-gradient btn-tasks" id="open-tasks" type="button">Tasks &amp; Goals</button>

  <section class="progress-section">
    <h2>Track Your Progress</h2>
    <p class="hint">Use the buttons to update each goal</p>
    <div class="goal-grid" id="goal-grid"></div>
  </section>

  <div class="modal-backdrop" id="task-modal">
    <div class="modal">
      <div class="modal-header">
        <h2>Tasks &amp; Goals</h2>
        <button class="btn-close" id="close-tasks" type="button">&times;</button>
      </div>
      <div class="task-input">
        <input type="text" id="new-task" placeholder="Add a new task..." />
        <select id="task-category">
          <option value="personal">Personal</option>
          <option value="work">Work</option>
          <option value="health">Health</option>
          <option value="learning">Learning</option>
        </select>
        <button class="btn-add" id="add-task" type="button">Add</button>
      </div>
      <div class="task-list" id="task-list"></div>
    </div>
  </div>

  <script>
    const streakEl = document.getElementById('streak');
    const dateEl = document.getElementById('date');
    const quoteTextEl = document.getElementById('quote-text');
    const quoteAuthorEl = document.getElementById('quote-author');
    const tipTextEl = document.getElementById('tip-text');
    const goalGridEl = document.getElementById('goal-grid');
    const taskListEl = document.getElementById('task-list');
    const taskModalEl = document.getElementById('task-modal');
    const newTaskEl = document.getElementById('new-task');
    const taskCategoryEl = document.getElementById('task-category');

    let journey = { streak: 1, date: '', todos: [], goals: [] };

    const postJson = async (url, body) => {
      const res = await fetch(url, {
        method: 'POST',
        headers: { 'content-type': 'application/json' },
        body: JSON.stringify(body)
      });
      if (!res.ok) {
        throw new Error('Request failed');
      }
      return res.json();
    };

    const renderGoals = () => {
      goalGridEl.innerHTML = '';
      journey.goals.forEach((goal) => {
        const card = document.createElement('div');
        card.className = 'goal-card';

        const title = document.createElement('h3');
        title.textContent = goal.name;
        title.style.color = goal.color;

        const label = document.createElement('span');
        label.className = 'goal-label';
        label.textContent = goal.progress + '%';

        const bar = document.createElement('div');
        bar.className = 'bar';
        const fill = document.createElement('div');
        fill.className = 'bar-fill';
        fill.style.width = goal.progress + '%';
        fill.style.background = goal.color;
        bar.appendChild(fill);

        const controls = document.createElement('div');
        controls.className = 'goal-controls';
        [-5, 5].forEach((delta) => {
          const btn = document.createElement('button');
          btn.className = 'btn-step';
          btn.type = 'button';
          btn.textContent = delta > 0 ? '+' : '-';
          btn.addEventListener('click', async () => {
            journey = await postJson('/api/goals/adjust', { name: goal.name, delta });
            render();
          });
          controls.appendChild(btn);
        });

        card.append(title, label, bar, controls);
        goalGridEl.appendChild(card);
      });
    };

    const moveTask = async (index, offset) => {
      const ids = journey.todos.map((t) => t.id);
      const target = index + offset;
      if (target < 0 || target >= ids.length) {
        return;
      }
      [ids[index], ids[target]] = [ids[target], ids[index]];
      journey = await postJson('/api/tasks/reorder', { ids });
      render();
    };

    const renderTasks = () => {
      taskListEl.innerHTML = '';
      journey.todos.forEach((todo, index) => {
        const item = document.createElement('div');
        item.className = todo.completed ? 'task-item done' : 'task-item';

        const checkbox = document.createElement('input');
        checkbox.type = 'checkbox';
        checkbox.checked = todo.completed;
        checkbox.addEventListener('change', async () => {
          journey = await postJson('/api/tasks/toggle', { id: todo.id });
          render();
        });

        const text = document.createElement('span');
        text.className = 'text';
        text.textContent = todo.text;

        const category = document.createElement('span');
        category.className = 'category';
        category.textContent = todo.category;

        const up = document.createElement('button');
        up.className = 'btn-plain';
        up.type = 'button';
        up.textContent = '↑';
        up.addEventListener('click', () => moveTask(index, -1));

        const down = document.createElement('button');
        down.className = 'btn-plain';
        down.type = 'button';
        down.textContent = '↓';
        down.addEventListener('click', () => moveTask(index, 1));

        const del = document.createElement('button');
        del.className = 'btn-plain';
        del.type = 'button';
        del.textContent = '×';
        del.addEventListener('click', async () => {
          journey = await postJson('/api/tasks/delete', { id: todo.id });
          render();
        });

        item.append(checkbox, text, category, up, down, del);
        taskListEl.appendChild(item);
      });
    };

    const render = () => {
      streakEl.textContent = journey.streak;
      dateEl.textContent = journey.date;
      renderGoals();
      renderTasks();
    };

    const loadJourney = async () => {
      const res = await fetch('/api/journey');
      if (res.ok) {
        journey = await res.json();
        render();
      }
    };

    const loadQuote = async () => {
      quoteTextEl.textContent = 'Loading inspiration...';
      quoteAuthorEl.textContent = '';
      const res = await fetch('/api/quote');
      if (res.ok) {
        const quote = await res.json();
        quoteTextEl.textContent = quote.text;
        quoteAuthorEl.textContent = quote.author ? '- ' + quote.author : '';
      }
    };

    const loadTip = async () => {
      const res = await fetch('/api/tip');
      if (res.ok) {
        const tip = await res.json();
        tipTextEl.textContent = tip.text;
      }
    };

    const addTask = async () => {
      const text = newTaskEl.value;
      if (!text.trim()) {
        return;
      }
      journey = await postJson('/api/tasks', { text, category: taskCategoryEl.value });
      newTaskEl.value = '';
      render();
    };

    document.getElementById('new-quote').addEventListener('click', loadQuote);
    document.getElementById('open-tasks').addEventListener('click', () => {
      taskModalEl.classList.add('open');
    });
    document.getElementById('close-tasks').addEventListener('click', () => {
      taskModalEl.classList.remove('open');
    });
    document.getElementById('add-task').addEventListener('click', addTask);
    newTaskEl.addEventListener('keypress', (event) => {
      if (event.key === 'Enter') {
        addTask();
      }
    });

    loadJourney();
    loadQuote();
    loadTip();
  </script>
</body>
</html>
"#;
